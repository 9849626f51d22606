//! Wrappers on top of large language model APIs, and the registry that maps
//! provider keys to them.

pub mod ai21;
pub use ai21::{AI21PenaltyData, AI21};

pub mod cohere;
pub use cohere::Cohere;

pub mod huggingface_hub;
pub use huggingface_hub::{HuggingFaceHub, HuggingFaceTask};

pub mod huggingface_pipeline;
pub use huggingface_pipeline::HuggingFacePipeline;

pub mod nlpcloud;
pub use nlpcloud::NLPCloud;

pub mod openai;
pub use openai::OpenAI;

pub mod loading;
pub mod provider;
pub mod registry;

pub use loading::{load_llm, load_llm_from_config, LLM_TYPE_KEY};
pub use provider::ProviderKey;
pub use registry::{list_providers, lookup, provider_class, provider_classes, ProviderClass};
