//! Error codes and context for reporting errors.

use std::{collections::HashMap, fmt};

use super::{LLMError, LangChainError, TextSplitterError};

/// Error code system
///
/// Each error kind gets a stable numeric code for tracking and classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// LLM errors (1000-1999)
    LLMError = 1000,
    LLMProviderNotFound = 1001,
    LLMMissingType = 1002,
    LLMMissingCredential = 1003,
    LLMInvalidConfig = 1004,
    LLMUnsupportedFileType = 1005,

    /// Text splitter errors (2000-2999)
    TextSplitterInvalidOptions = 2001,
    TextSplitterTokenizerError = 2002,

    /// Generic errors (9000-9999)
    IOError = 9001,
    JsonError = 9002,
}

impl ErrorCode {
    pub fn from_error(error: &LangChainError) -> Self {
        match error {
            LangChainError::LLMError(llm_error) => match llm_error {
                LLMError::ProviderNotFound { .. } => ErrorCode::LLMProviderNotFound,
                LLMError::MissingLLMType => ErrorCode::LLMMissingType,
                LLMError::MissingCredential { .. } => ErrorCode::LLMMissingCredential,
                LLMError::InvalidConfig(_) => ErrorCode::LLMInvalidConfig,
                LLMError::UnsupportedFileType(_) => ErrorCode::LLMUnsupportedFileType,
                _ => ErrorCode::LLMError,
            },
            LangChainError::TextSplitterError(splitter_error) => match splitter_error {
                TextSplitterError::InvalidChunkOverlap { .. }
                | TextSplitterError::InvalidSplitterOptions => {
                    ErrorCode::TextSplitterInvalidOptions
                }
                TextSplitterError::TokenizerNotFound
                | TextSplitterError::InvalidTokenizer
                | TextSplitterError::InvalidModel => ErrorCode::TextSplitterTokenizerError,
            },
            LangChainError::IOError(_) => ErrorCode::IOError,
            LangChainError::JsonError(_) => ErrorCode::JsonError,
        }
    }

    pub fn as_u32(self) -> u32 {
        self as u32
    }

    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::LLMError => "LLM operation failed",
            ErrorCode::LLMProviderNotFound => "LLM provider not registered",
            ErrorCode::LLMMissingType => "LLM config has no type",
            ErrorCode::LLMMissingCredential => "LLM credential not found",
            ErrorCode::LLMInvalidConfig => "LLM config is invalid",
            ErrorCode::LLMUnsupportedFileType => "LLM config file type not supported",
            ErrorCode::TextSplitterInvalidOptions => "Text splitter options are invalid",
            ErrorCode::TextSplitterTokenizerError => "Text splitter tokenizer unavailable",
            ErrorCode::IOError => "IO operation failed",
            ErrorCode::JsonError => "JSON parsing/serialization failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}: {}", self.as_u32(), self.description())
    }
}

/// Context attached to an error when it is reported.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    pub operation: Option<String>,
    pub module: Option<String>,
    pub metadata: HashMap<String, String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn format(&self) -> String {
        let mut parts = Vec::new();

        if let Some(ref module) = self.module {
            parts.push(format!("module: {}", module));
        }

        if let Some(ref operation) = self.operation {
            parts.push(format!("operation: {}", operation));
        }

        if !self.metadata.is_empty() {
            let mut metadata: Vec<String> = self
                .metadata
                .iter()
                .map(|(k, v)| format!("{}: {}", k, v))
                .collect();
            metadata.sort();
            parts.push(format!("metadata: {}", metadata.join(", ")));
        }

        if parts.is_empty() {
            "no context".to_string()
        } else {
            parts.join("; ")
        }
    }
}

/// Context derived from the error itself.
///
/// An unknown provider also records the list of valid providers, so the
/// report tells the user what they could have asked for.
pub fn error_context(error: &LangChainError) -> ErrorContext {
    let mut context = ErrorContext::new();

    match error {
        LangChainError::LLMError(llm_error) => {
            context.module = Some("llm".to_string());
            if let LLMError::ProviderNotFound {
                provider,
                available,
            } = llm_error
            {
                context = context
                    .with_operation("lookup")
                    .with_metadata("provider", provider.clone())
                    .with_metadata("available", available.clone());
            }
        }
        LangChainError::TextSplitterError(_) => {
            context.module = Some("text_splitter".to_string());
        }
        _ => {}
    }

    context
}

/// Full description of an error: code, message and context.
///
/// # Example
///
/// ```rust
/// use langchain_llms::error::{error_info, LangChainError};
///
/// let error: LangChainError = langchain_llms::llm::lookup("bogus").unwrap_err().into();
/// assert!(error_info(&error).contains("E1001"));
/// ```
pub fn error_info(error: &LangChainError) -> String {
    let code = ErrorCode::from_error(error);
    let context = error_context(error);

    format!("[{}] {} [{}]", code, error, context.format())
}
