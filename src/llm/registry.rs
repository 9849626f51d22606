//! Static table mapping provider keys to the wrapper types that implement them.
//!
//! The table is made of `static` items and has no write path, so lookups need
//! no synchronization and always return the same `&'static` entry.

use std::fmt;

use log::debug;
use serde_json::Value;

use crate::language_models::{FromConfig, LLMError, LLM};

use super::{
    ai21::AI21, cohere::Cohere, huggingface_hub::HuggingFaceHub,
    huggingface_pipeline::HuggingFacePipeline, nlpcloud::NLPCloud, openai::OpenAI, ProviderKey,
};

/// Builds a boxed wrapper from the untagged part of a config.
pub type LLMConstructor = fn(&Value) -> Result<Box<dyn LLM>, LLMError>;

/// A registered provider: its key, exported wrapper name and constructor.
pub struct ProviderClass {
    key: ProviderKey,
    constructor: LLMConstructor,
}

impl ProviderClass {
    pub fn key(&self) -> ProviderKey {
        self.key
    }

    /// Name of the wrapper type, e.g. `OpenAI`.
    pub fn name(&self) -> &'static str {
        self.key.class_name()
    }

    /// Creates a wrapper instance from provider specific configuration.
    pub fn instantiate(&self, config: &Value) -> Result<Box<dyn LLM>, LLMError> {
        (self.constructor)(config)
    }
}

impl fmt::Debug for ProviderClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderClass")
            .field("key", &self.key)
            .field("name", &self.name())
            .finish()
    }
}

fn construct<T>(config: &Value) -> Result<Box<dyn LLM>, LLMError>
where
    T: FromConfig + 'static,
{
    Ok(Box::new(T::from_config(config)?))
}

static AI21_CLASS: ProviderClass = ProviderClass {
    key: ProviderKey::AI21,
    constructor: construct::<AI21>,
};

static COHERE_CLASS: ProviderClass = ProviderClass {
    key: ProviderKey::Cohere,
    constructor: construct::<Cohere>,
};

static HUGGINGFACE_HUB_CLASS: ProviderClass = ProviderClass {
    key: ProviderKey::HuggingFaceHub,
    constructor: construct::<HuggingFaceHub>,
};

static NLPCLOUD_CLASS: ProviderClass = ProviderClass {
    key: ProviderKey::NLPCloud,
    constructor: construct::<NLPCloud>,
};

static OPENAI_CLASS: ProviderClass = ProviderClass {
    key: ProviderKey::OpenAI,
    constructor: construct::<OpenAI>,
};

static HUGGINGFACE_PIPELINE_CLASS: ProviderClass = ProviderClass {
    key: ProviderKey::HuggingFacePipeline,
    constructor: construct::<HuggingFacePipeline>,
};

/// Returns the registered class for a provider key.
pub fn provider_class(key: ProviderKey) -> &'static ProviderClass {
    match key {
        ProviderKey::AI21 => &AI21_CLASS,
        ProviderKey::Cohere => &COHERE_CLASS,
        ProviderKey::HuggingFaceHub => &HUGGINGFACE_HUB_CLASS,
        ProviderKey::NLPCloud => &NLPCLOUD_CLASS,
        ProviderKey::OpenAI => &OPENAI_CLASS,
        ProviderKey::HuggingFacePipeline => &HUGGINGFACE_PIPELINE_CLASS,
    }
}

/// Looks up a provider class by its string key.
///
/// # Errors
/// [`LLMError::ProviderNotFound`] when `key` is not a registered provider; the
/// error lists the valid keys.
///
/// # Example
/// ```rust
/// use langchain_llms::llm::lookup;
///
/// let class = lookup("openai").unwrap();
/// assert_eq!(class.name(), "OpenAI");
/// assert!(lookup("bogus").is_err());
/// ```
pub fn lookup(key: &str) -> Result<&'static ProviderClass, LLMError> {
    let provider_key = key.parse::<ProviderKey>()?;
    debug!("Resolved LLM provider '{}'", provider_key);
    Ok(provider_class(provider_key))
}

/// All registered provider keys, each once, in registration order.
pub fn list_providers() -> Vec<ProviderKey> {
    ProviderKey::ALL.to_vec()
}

pub fn provider_classes() -> impl Iterator<Item = &'static ProviderClass> {
    ProviderKey::ALL.into_iter().map(provider_class)
}
