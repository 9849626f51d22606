use std::collections::BTreeMap;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    language_models::{
        common_config::deserialize_secret, llm::params_of, FromConfig, LLMError, LLMHelpers, LLM,
    },
    llm::ProviderKey,
};

use super::models::AI21PenaltyData;

const API_KEY_FIELD: &str = "ai21_api_key";
const API_KEY_ENV: &str = "AI21_API_KEY";

/// Wrapper around AI21 Jurassic models.
///
/// Generation parameters use AI21's camelCase names in configs
/// (`maxTokens`, `topP`, ...).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct AI21 {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub min_tokens: u32,
    pub top_p: f64,
    pub presence_penalty: AI21PenaltyData,
    pub count_penalty: AI21PenaltyData,
    pub frequency_penalty: AI21PenaltyData,
    pub num_results: u32,
    pub logit_bias: Option<BTreeMap<String, f64>>,
    #[serde(
        rename = "ai21_api_key",
        skip_serializing,
        deserialize_with = "deserialize_secret"
    )]
    ai21_api_key: Option<SecretString>,
}

impl Default for AI21 {
    fn default() -> Self {
        Self {
            model: "j1-jumbo".to_string(),
            temperature: 0.7,
            max_tokens: 256,
            min_tokens: 0,
            top_p: 1.0,
            presence_penalty: AI21PenaltyData::default(),
            count_penalty: AI21PenaltyData::default(),
            frequency_penalty: AI21PenaltyData::default(),
            num_results: 1,
            logit_bias: None,
            ai21_api_key: None,
        }
    }
}

impl AI21 {
    pub fn new() -> Self {
        Self {
            ai21_api_key: LLMHelpers::get_api_key_from_env(API_KEY_ENV),
            ..Self::default()
        }
    }

    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_presence_penalty(mut self, penalty: AI21PenaltyData) -> Self {
        self.presence_penalty = penalty;
        self
    }

    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.ai21_api_key = Some(SecretString::from(api_key.into()));
        self
    }

    pub fn api_key(&self) -> Option<&SecretString> {
        self.ai21_api_key.as_ref()
    }

    pub fn validate_environment(mut self) -> Result<Self, LLMError> {
        LLMHelpers::validate_model_name(&self.model)?;
        if self.min_tokens > self.max_tokens {
            return Err(LLMError::InvalidConfig(format!(
                "minTokens ({}) cannot exceed maxTokens ({})",
                self.min_tokens, self.max_tokens
            )));
        }
        self.ai21_api_key = Some(LLMHelpers::resolve_api_key(
            self.ai21_api_key.take(),
            API_KEY_FIELD,
            API_KEY_ENV,
        )?);
        Ok(self)
    }

    pub fn default_params(&self) -> Map<String, Value> {
        let mut params = params_of(self);
        params.remove("model");
        params
    }
}

impl LLM for AI21 {
    fn llm_type(&self) -> ProviderKey {
        ProviderKey::AI21
    }

    fn identifying_params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        params.insert("model".to_string(), Value::String(self.model.clone()));
        params.extend(self.default_params());
        params
    }
}

impl FromConfig for AI21 {
    fn from_config(config: &Value) -> Result<Self, LLMError> {
        let llm: Self = serde_json::from_value(config.clone())?;
        llm.validate_environment()
    }
}
