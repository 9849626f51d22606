use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    language_models::{
        common_config::deserialize_secret, llm::params_of, FromConfig, LLMError, LLMHelpers, LLM,
    },
    llm::ProviderKey,
};

const API_KEY_FIELD: &str = "cohere_api_key";
const API_KEY_ENV: &str = "COHERE_API_KEY";

/// Wrapper around Cohere generation models.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Cohere {
    /// Model name to use; the provider default when unset.
    pub model: Option<String>,
    /// Denotes the number of tokens to predict per generation.
    pub max_tokens: u32,
    /// A non-negative float that tunes the degree of randomness in generation.
    pub temperature: f64,
    /// Number of most likely tokens to consider at each step.
    pub k: u32,
    /// Total probability mass of tokens to consider at each step.
    pub p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
    #[serde(skip_serializing, deserialize_with = "deserialize_secret")]
    cohere_api_key: Option<SecretString>,
}

impl Default for Cohere {
    fn default() -> Self {
        Self {
            model: None,
            max_tokens: 256,
            temperature: 0.6,
            k: 0,
            p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
            cohere_api_key: None,
        }
    }
}

impl Cohere {
    pub fn new() -> Self {
        Self {
            cohere_api_key: LLMHelpers::get_api_key_from_env(API_KEY_ENV),
            ..Self::default()
        }
    }

    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = Some(model.into());
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

    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.cohere_api_key = Some(SecretString::from(api_key.into()));
        self
    }

    pub fn api_key(&self) -> Option<&SecretString> {
        self.cohere_api_key.as_ref()
    }

    pub fn validate_environment(mut self) -> Result<Self, LLMError> {
        if let Some(model) = &self.model {
            LLMHelpers::validate_model_name(model)?;
        }
        if !(0.0..=1.0).contains(&self.p) {
            return Err(LLMError::InvalidConfig(format!(
                "p must be between 0 and 1, got {}",
                self.p
            )));
        }
        self.cohere_api_key = Some(LLMHelpers::resolve_api_key(
            self.cohere_api_key.take(),
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

impl LLM for Cohere {
    fn llm_type(&self) -> ProviderKey {
        ProviderKey::Cohere
    }

    fn identifying_params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        params.insert(
            "model".to_string(),
            self.model.clone().map(Value::String).unwrap_or(Value::Null),
        );
        params.extend(self.default_params());
        params
    }
}

impl FromConfig for Cohere {
    fn from_config(config: &Value) -> Result<Self, LLMError> {
        let llm: Self = serde_json::from_value(config.clone())?;
        llm.validate_environment()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_unset_model_is_null() {
        let params = Cohere::default().identifying_params();
        assert_eq!(params["model"], Value::Null);
        assert_eq!(params["temperature"], json!(0.6));
        assert_eq!(params["k"], json!(0));
    }

    #[test]
    fn test_from_config_round_trip() {
        let llm = Cohere::default()
            .with_model("command-xlarge")
            .with_max_tokens(40);
        let mut config = llm.identifying_params();
        config.insert(API_KEY_FIELD.to_string(), json!("test-key"));

        let loaded = Cohere::from_config(&Value::Object(config)).unwrap();
        assert_eq!(loaded.identifying_params(), llm.identifying_params());
    }

    #[test]
    fn test_rejects_out_of_range_p() {
        let result = Cohere::from_config(&json!({"p": 1.5, "cohere_api_key": "k"}));
        assert!(matches!(result, Err(LLMError::InvalidConfig(_))));
    }
}
