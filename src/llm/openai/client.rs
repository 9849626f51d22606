use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    language_models::{
        common_config::deserialize_secret, llm::params_of, FromConfig, LLMError, LLMHelpers, LLM,
    },
    llm::ProviderKey,
};

const API_KEY_FIELD: &str = "openai_api_key";
const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Wrapper around OpenAI completion models.
///
/// The credential is read from `OPENAI_API_KEY` unless passed as
/// `openai_api_key`.
///
/// # Example
/// ```rust
/// use langchain_llms::{LLM, OpenAI};
///
/// let llm = OpenAI::default()
///     .with_model("text-davinci-003")
///     .with_temperature(0.0);
/// assert_eq!(llm.identifying_params()["model_name"], "text-davinci-003");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OpenAI {
    pub model_name: String,
    /// What sampling temperature to use.
    pub temperature: f64,
    /// The maximum number of tokens to generate in the completion.
    pub max_tokens: u32,
    pub top_p: f64,
    /// Penalizes repeated tokens according to frequency.
    pub frequency_penalty: f64,
    /// Penalizes repeated tokens.
    pub presence_penalty: f64,
    /// How many completions to generate for each prompt.
    pub n: u32,
    /// Generates best_of completions server-side and returns the "best".
    pub best_of: u32,
    #[serde(skip_serializing, deserialize_with = "deserialize_secret")]
    openai_api_key: Option<SecretString>,
}

impl Default for OpenAI {
    fn default() -> Self {
        Self {
            model_name: "text-davinci-002".to_string(),
            temperature: 0.7,
            max_tokens: 256,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
            n: 1,
            best_of: 1,
            openai_api_key: None,
        }
    }
}

impl OpenAI {
    /// Default configuration with the credential taken from the environment.
    pub fn new() -> Self {
        Self {
            openai_api_key: LLMHelpers::get_api_key_from_env(API_KEY_ENV),
            ..Self::default()
        }
    }

    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model_name = model.into();
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
        self.openai_api_key = Some(SecretString::from(api_key.into()));
        self
    }

    pub fn api_key(&self) -> Option<&SecretString> {
        self.openai_api_key.as_ref()
    }

    /// Resolves the credential and checks the model parameters.
    pub fn validate_environment(mut self) -> Result<Self, LLMError> {
        LLMHelpers::validate_model_name(&self.model_name)?;
        if self.n == 0 || self.best_of < self.n {
            return Err(LLMError::InvalidConfig(format!(
                "best_of ({}) must be at least n ({}) and n must be positive",
                self.best_of, self.n
            )));
        }
        self.openai_api_key = Some(LLMHelpers::resolve_api_key(
            self.openai_api_key.take(),
            API_KEY_FIELD,
            API_KEY_ENV,
        )?);
        Ok(self)
    }

    /// Generation parameters sent with every request.
    pub fn default_params(&self) -> Map<String, Value> {
        let mut params = params_of(self);
        params.remove("model_name");
        params
    }
}

impl LLM for OpenAI {
    fn llm_type(&self) -> ProviderKey {
        ProviderKey::OpenAI
    }

    fn identifying_params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        params.insert(
            "model_name".to_string(),
            Value::String(self.model_name.clone()),
        );
        params.extend(self.default_params());
        params
    }
}

impl FromConfig for OpenAI {
    fn from_config(config: &Value) -> Result<Self, LLMError> {
        let llm: Self = serde_json::from_value(config.clone())?;
        llm.validate_environment()
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_defaults() {
        let llm = OpenAI::default();
        assert_eq!(llm.model_name, "text-davinci-002");
        assert_eq!(llm.max_tokens, 256);
        assert_eq!(llm.best_of, 1);
    }

    #[test]
    fn test_identifying_params_exclude_key() {
        let llm = OpenAI::default().with_api_key("sk-secret");
        let params = llm.identifying_params();
        assert_eq!(params["model_name"], json!("text-davinci-002"));
        assert_eq!(params["temperature"], json!(0.7));
        assert_eq!(params["best_of"], json!(1));
        assert!(!params.contains_key(API_KEY_FIELD));
        assert!(!llm.to_config().to_string().contains("sk-secret"));
    }

    #[test]
    fn test_default_params_exclude_model() {
        let params = OpenAI::default().default_params();
        assert!(!params.contains_key("model_name"));
        assert_eq!(params.len(), 7);
    }

    #[test]
    fn test_from_config() {
        let llm = OpenAI::from_config(&json!({
            "model_name": "text-curie-001",
            "max_tokens": 64,
            "openai_api_key": "sk-test",
        }))
        .unwrap();
        assert_eq!(llm.model_name, "text-curie-001");
        assert_eq!(llm.max_tokens, 64);
        assert_eq!(llm.temperature, 0.7);
        assert_eq!(llm.api_key().unwrap().expose_secret(), "sk-test");
    }

    #[test]
    fn test_invalid_best_of() {
        let result = OpenAI::from_config(&json!({
            "n": 3,
            "best_of": 2,
            "openai_api_key": "sk-test",
        }));
        assert!(matches!(result, Err(LLMError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let result = OpenAI::from_config(&json!({"model": "gpt2", "openai_api_key": "sk"}));
        assert!(matches!(result, Err(LLMError::SerdeError(_))));
    }

    #[test]
    fn test_to_config_is_tagged() {
        let config = OpenAI::default().to_config();
        assert_eq!(config["_type"], json!("openai"));
    }
}
