use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    language_models::{llm::params_of, FromConfig, LLMError, LLMHelpers, LLM},
    llm::{HuggingFaceTask, ProviderKey},
};

/// Wrapper around a HuggingFace pipeline run on the local machine.
///
/// Needs no credential; the model is identified by its Hub id and task.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HuggingFacePipeline {
    pub model_id: String,
    pub task: HuggingFaceTask,
    /// Keyword arguments passed to the model.
    pub model_kwargs: Option<Map<String, Value>>,
}

impl Default for HuggingFacePipeline {
    fn default() -> Self {
        Self {
            model_id: "gpt2".to_string(),
            task: HuggingFaceTask::default(),
            model_kwargs: None,
        }
    }
}

impl HuggingFacePipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a pipeline wrapper from a model id and a task name.
    ///
    /// # Errors
    /// [`LLMError::InvalidConfig`] if the task is not a supported generation task
    /// or the model id is empty.
    pub fn from_model_id<S: Into<String>>(
        model_id: S,
        task: &str,
        model_kwargs: Option<Map<String, Value>>,
    ) -> Result<Self, LLMError> {
        Self {
            model_id: model_id.into(),
            task: task.parse()?,
            model_kwargs,
        }
        .validate()
    }

    pub fn validate(self) -> Result<Self, LLMError> {
        LLMHelpers::validate_model_name(&self.model_id)?;
        Ok(self)
    }
}

impl LLM for HuggingFacePipeline {
    fn llm_type(&self) -> ProviderKey {
        ProviderKey::HuggingFacePipeline
    }

    fn identifying_params(&self) -> Map<String, Value> {
        params_of(self)
    }
}

impl FromConfig for HuggingFacePipeline {
    fn from_config(config: &Value) -> Result<Self, LLMError> {
        HuggingFaceTask::check_config(config)?;
        let llm: Self = serde_json::from_value(config.clone())?;
        llm.validate()
    }
}
