use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    language_models::{
        common_config::deserialize_secret, llm::params_of, FromConfig, LLMError, LLMHelpers, LLM,
    },
    llm::ProviderKey,
};

use super::models::HuggingFaceTask;

const API_KEY_FIELD: &str = "huggingfacehub_api_token";
const API_KEY_ENV: &str = "HUGGINGFACEHUB_API_TOKEN";

/// Wrapper around models hosted on the HuggingFace Hub inference API.
///
/// # Example
/// ```rust
/// use langchain_llms::{HuggingFaceHub, LLM};
///
/// let llm = HuggingFaceHub::default().with_repo_id("google/flan-t5-xl");
/// assert_eq!(llm.identifying_params()["repo_id"], "google/flan-t5-xl");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HuggingFaceHub {
    /// Model repository to use.
    pub repo_id: String,
    /// Task to call the model with; inferred by the Hub when unset.
    pub task: Option<HuggingFaceTask>,
    /// Keyword arguments passed to the model.
    pub model_kwargs: Option<Map<String, Value>>,
    #[serde(skip_serializing, deserialize_with = "deserialize_secret")]
    huggingfacehub_api_token: Option<SecretString>,
}

impl Default for HuggingFaceHub {
    fn default() -> Self {
        Self {
            repo_id: "gpt2".to_string(),
            task: None,
            model_kwargs: None,
            huggingfacehub_api_token: None,
        }
    }
}

impl HuggingFaceHub {
    pub fn new() -> Self {
        Self {
            huggingfacehub_api_token: LLMHelpers::get_api_key_from_env(API_KEY_ENV),
            ..Self::default()
        }
    }

    pub fn with_repo_id<S: Into<String>>(mut self, repo_id: S) -> Self {
        self.repo_id = repo_id.into();
        self
    }

    pub fn with_task(mut self, task: HuggingFaceTask) -> Self {
        self.task = Some(task);
        self
    }

    pub fn with_model_kwargs(mut self, model_kwargs: Map<String, Value>) -> Self {
        self.model_kwargs = Some(model_kwargs);
        self
    }

    pub fn with_api_token<S: Into<String>>(mut self, api_token: S) -> Self {
        self.huggingfacehub_api_token = Some(SecretString::from(api_token.into()));
        self
    }

    pub fn api_token(&self) -> Option<&SecretString> {
        self.huggingfacehub_api_token.as_ref()
    }

    pub fn validate_environment(mut self) -> Result<Self, LLMError> {
        LLMHelpers::validate_model_name(&self.repo_id)?;
        self.huggingfacehub_api_token = Some(LLMHelpers::resolve_api_key(
            self.huggingfacehub_api_token.take(),
            API_KEY_FIELD,
            API_KEY_ENV,
        )?);
        Ok(self)
    }
}

impl LLM for HuggingFaceHub {
    fn llm_type(&self) -> ProviderKey {
        ProviderKey::HuggingFaceHub
    }

    fn identifying_params(&self) -> Map<String, Value> {
        params_of(self)
    }
}

impl FromConfig for HuggingFaceHub {
    fn from_config(config: &Value) -> Result<Self, LLMError> {
        HuggingFaceTask::check_config(config)?;
        let llm: Self = serde_json::from_value(config.clone())?;
        llm.validate_environment()
    }
}
