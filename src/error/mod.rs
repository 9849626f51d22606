//! Crate-level error handling.
//!
//! Each module defines its own `thiserror` enum; [`LangChainError`] wraps them
//! so callers can propagate any of them with `?`.

mod utils;

pub use crate::language_models::LLMError;
pub use crate::text_splitter::TextSplitterError;
pub use utils::{error_context, error_info, ErrorCode, ErrorContext};

/// Top-level error combining the errors of every module.
#[derive(thiserror::Error, Debug)]
pub enum LangChainError {
    #[error("LLM error: {0}")]
    LLMError(#[from] LLMError),

    #[error("Text splitter error: {0}")]
    TextSplitterError(#[from] TextSplitterError),

    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LangChainError>;
