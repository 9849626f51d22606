use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::language_models::LLMError;

/// Identifier of a registered LLM provider.
///
/// The set is closed: every provider the registry knows about has a variant
/// here, and string input is parsed into a variant at the boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProviderKey {
    /// AI21 Studio (Jurassic models)
    #[serde(rename = "ai21")]
    AI21,
    /// Cohere generate API
    #[serde(rename = "cohere")]
    Cohere,
    /// HuggingFace Hub hosted inference
    #[serde(rename = "huggingface_hub")]
    HuggingFaceHub,
    /// NLP Cloud
    #[serde(rename = "nlpcloud")]
    NLPCloud,
    /// OpenAI completions
    #[serde(rename = "openai")]
    OpenAI,
    /// Locally run HuggingFace pipeline
    #[serde(rename = "huggingface_pipeline")]
    HuggingFacePipeline,
}

impl ProviderKey {
    /// All providers, in registration order.
    pub const ALL: [ProviderKey; 6] = [
        ProviderKey::AI21,
        ProviderKey::Cohere,
        ProviderKey::HuggingFaceHub,
        ProviderKey::NLPCloud,
        ProviderKey::OpenAI,
        ProviderKey::HuggingFacePipeline,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKey::AI21 => "ai21",
            ProviderKey::Cohere => "cohere",
            ProviderKey::HuggingFaceHub => "huggingface_hub",
            ProviderKey::NLPCloud => "nlpcloud",
            ProviderKey::OpenAI => "openai",
            ProviderKey::HuggingFacePipeline => "huggingface_pipeline",
        }
    }

    /// Name of the wrapper type exported for this provider
    pub fn class_name(&self) -> &'static str {
        match self {
            ProviderKey::AI21 => "AI21",
            ProviderKey::Cohere => "Cohere",
            ProviderKey::HuggingFaceHub => "HuggingFaceHub",
            ProviderKey::NLPCloud => "NLPCloud",
            ProviderKey::OpenAI => "OpenAI",
            ProviderKey::HuggingFacePipeline => "HuggingFacePipeline",
        }
    }

    /// Environment variable holding the provider credential, if it needs one.
    pub fn api_key_env(&self) -> Option<&'static str> {
        match self {
            ProviderKey::AI21 => Some("AI21_API_KEY"),
            ProviderKey::Cohere => Some("COHERE_API_KEY"),
            ProviderKey::HuggingFaceHub => Some("HUGGINGFACEHUB_API_TOKEN"),
            ProviderKey::NLPCloud => Some("NLPCLOUD_API_KEY"),
            ProviderKey::OpenAI => Some("OPENAI_API_KEY"),
            ProviderKey::HuggingFacePipeline => None,
        }
    }

    /// Comma separated list of every key, used in lookup errors.
    pub fn available() -> String {
        Self::ALL
            .iter()
            .map(|key| key.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ProviderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKey {
    type Err = LLMError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| LLMError::ProviderNotFound {
                provider: s.to_string(),
                available: Self::available(),
            })
    }
}
