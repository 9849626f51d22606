use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    language_models::{
        common_config::deserialize_secret, llm::params_of, FromConfig, LLMError, LLMHelpers, LLM,
    },
    llm::ProviderKey,
};

const API_KEY_FIELD: &str = "nlpcloud_api_key";
const API_KEY_ENV: &str = "NLPCLOUD_API_KEY";

/// Wrapper around NLP Cloud generation models.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NLPCloud {
    pub model_name: String,
    pub temperature: f64,
    /// Minimum number of tokens to generate.
    pub min_length: u32,
    /// Maximum number of tokens to generate.
    pub max_length: u32,
    /// Whether min_length and max_length should include the length of the input.
    pub length_no_input: bool,
    /// Whether the input text should be removed from the result.
    pub remove_input: bool,
    /// Whether the end sequence should be removed from the result.
    pub remove_end_sequence: bool,
    /// Tokens that should not be generated.
    pub bad_words: Vec<String>,
    pub top_p: f64,
    pub top_k: u32,
    pub repetition_penalty: f64,
    pub length_penalty: f64,
    pub do_sample: bool,
    pub num_beams: u32,
    /// Whether beam search stops as soon as num_beams candidates are finished.
    pub early_stopping: bool,
    pub num_return_sequences: u32,
    #[serde(skip_serializing, deserialize_with = "deserialize_secret")]
    nlpcloud_api_key: Option<SecretString>,
}

impl Default for NLPCloud {
    fn default() -> Self {
        Self {
            model_name: "finetuned-gpt-neox-20b".to_string(),
            temperature: 0.7,
            min_length: 1,
            max_length: 256,
            length_no_input: true,
            remove_input: true,
            remove_end_sequence: true,
            bad_words: Vec::new(),
            top_p: 1.0,
            top_k: 50,
            repetition_penalty: 1.0,
            length_penalty: 1.0,
            do_sample: true,
            num_beams: 1,
            early_stopping: false,
            num_return_sequences: 1,
            nlpcloud_api_key: None,
        }
    }
}

impl NLPCloud {
    pub fn new() -> Self {
        Self {
            nlpcloud_api_key: LLMHelpers::get_api_key_from_env(API_KEY_ENV),
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

    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_bad_words(mut self, bad_words: Vec<String>) -> Self {
        self.bad_words = bad_words;
        self
    }

    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.nlpcloud_api_key = Some(SecretString::from(api_key.into()));
        self
    }

    pub fn api_key(&self) -> Option<&SecretString> {
        self.nlpcloud_api_key.as_ref()
    }

    pub fn validate_environment(mut self) -> Result<Self, LLMError> {
        LLMHelpers::validate_model_name(&self.model_name)?;
        if self.min_length > self.max_length {
            return Err(LLMError::InvalidConfig(format!(
                "min_length ({}) cannot exceed max_length ({})",
                self.min_length, self.max_length
            )));
        }
        if self.num_return_sequences > self.num_beams && !self.do_sample {
            return Err(LLMError::InvalidConfig(format!(
                "num_return_sequences ({}) cannot exceed num_beams ({}) without sampling",
                self.num_return_sequences, self.num_beams
            )));
        }
        self.nlpcloud_api_key = Some(LLMHelpers::resolve_api_key(
            self.nlpcloud_api_key.take(),
            API_KEY_FIELD,
            API_KEY_ENV,
        )?);
        Ok(self)
    }

    pub fn default_params(&self) -> Map<String, Value> {
        let mut params = params_of(self);
        params.remove("model_name");
        params
    }
}

impl LLM for NLPCloud {
    fn llm_type(&self) -> ProviderKey {
        ProviderKey::NLPCloud
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

impl FromConfig for NLPCloud {
    fn from_config(config: &Value) -> Result<Self, LLMError> {
        let llm: Self = serde_json::from_value(config.clone())?;
        llm.validate_environment()
    }
}
