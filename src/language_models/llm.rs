use std::{fmt::Debug, path::Path};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::llm::{loading::save_llm_config, ProviderKey, LLM_TYPE_KEY};

use super::LLMError;

/// Shared capability of every provider wrapper held by the registry.
///
/// A wrapper carries the configuration of one model at one provider. The
/// `_type`-tagged form returned by [`LLM::to_config`] is what
/// [`crate::llm::load_llm_from_config`] turns back into a wrapper.
pub trait LLM: Sync + Send + LLMClone + Debug {
    /// Registry key of the provider backing this model.
    fn llm_type(&self) -> ProviderKey;

    /// Parameters that identify this model configuration. Never contains credentials.
    fn identifying_params(&self) -> Map<String, Value>;

    fn to_config(&self) -> Value {
        let mut config = self.identifying_params();
        config.insert(
            LLM_TYPE_KEY.to_string(),
            Value::String(self.llm_type().to_string()),
        );
        Value::Object(config)
    }

    /// Writes [`LLM::to_config`] to a `.json` or `.yaml` file, creating parent
    /// directories as needed.
    fn save(&self, path: &Path) -> Result<(), LLMError> {
        save_llm_config(&self.to_config(), path)
    }
}

/// Construction of a wrapper from the untagged part of a saved config.
pub trait FromConfig: LLM + Sized {
    fn from_config(config: &Value) -> Result<Self, LLMError>;
}

pub trait LLMClone {
    fn clone_box(&self) -> Box<dyn LLM>;
}

impl<T> LLMClone for T
where
    T: 'static + LLM + Clone,
{
    fn clone_box(&self) -> Box<dyn LLM> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn LLM> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl<L> From<L> for Box<dyn LLM>
where
    L: 'static + LLM,
{
    fn from(llm: L) -> Self {
        Box::new(llm)
    }
}

// Serialized fields of a wrapper as a JSON object; secrets are skipped by the wrappers' serde attributes
pub(crate) fn params_of<T: Serialize>(value: &T) -> Map<String, Value> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => map,
        // Wrappers are plain structs with string keys and always serialize to an object
        other => {
            debug_assert!(false, "wrapper did not serialize to an object: {other:?}");
            Map::new()
        }
    }
}
