pub mod common_config;
pub mod llm;

mod error;
pub use error::*;

pub use common_config::LLMHelpers;
pub use llm::{FromConfig, LLMClone, LLM};
