//! # langchain-llms
//!
//! Wrappers on top of large language model APIs, registered under short
//! provider keys so they can be created from configuration.
//!
//! ## Overview
//!
//! - **Registry**: [`llm::lookup`] resolves `"openai"`, `"cohere"`, ... to a
//!   [`llm::ProviderClass`]; [`llm::list_providers`] enumerates every key
//! - **Wrappers**: [`AI21`], [`Cohere`], [`HuggingFaceHub`], [`HuggingFacePipeline`],
//!   [`NLPCloud`] and [`OpenAI`], all implementing [`LLM`]
//! - **Loading**: `_type`-tagged configs and files via [`llm::load_llm_from_config`]
//!   and [`llm::load_llm`] (YAML behind the `yaml` feature)
//! - **Text splitters**: [`text_splitter::CharacterTextSplitter`] with character
//!   or tiktoken sized chunks
//!
//! ## Example
//!
//! ```rust
//! use langchain_llms::llm::{list_providers, lookup};
//! use langchain_llms::LLM;
//! use serde_json::json;
//!
//! assert_eq!(list_providers().len(), 6);
//!
//! let llm = lookup("huggingface_pipeline")
//!     .unwrap()
//!     .instantiate(&json!({"model_id": "gpt2"}))
//!     .unwrap();
//! assert_eq!(llm.to_config()["_type"], "huggingface_pipeline");
//! ```

/// Unified error types and utilities.
pub mod error;
/// The `LLM` trait and configuration helpers shared by the wrappers.
pub mod language_models;
/// Provider wrappers, the provider registry and config loading.
pub mod llm;
/// Text splitters.
pub mod text_splitter;

pub use language_models::{LLMError, LLM};
pub use llm::{
    AI21PenaltyData, Cohere, HuggingFaceHub, HuggingFacePipeline, HuggingFaceTask, NLPCloud,
    OpenAI, ProviderKey, AI21,
};
