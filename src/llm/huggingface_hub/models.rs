use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::language_models::LLMError;

/// Generation tasks supported by the HuggingFace wrappers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HuggingFaceTask {
    #[default]
    #[serde(rename = "text-generation")]
    TextGeneration,
    #[serde(rename = "text2text-generation")]
    Text2TextGeneration,
}

impl HuggingFaceTask {
    pub const ALL: [HuggingFaceTask; 2] = [
        HuggingFaceTask::TextGeneration,
        HuggingFaceTask::Text2TextGeneration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HuggingFaceTask::TextGeneration => "text-generation",
            HuggingFaceTask::Text2TextGeneration => "text2text-generation",
        }
    }

    /// Parses the `task` entry of a raw wrapper config, if it holds a string.
    ///
    /// An unsupported task is reported as [`LLMError::InvalidConfig`] rather than
    /// as a decoding error of the whole config.
    pub(crate) fn check_config(config: &Value) -> Result<(), LLMError> {
        match config.get("task") {
            Some(Value::String(task)) => task.parse::<HuggingFaceTask>().map(|_| ()),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for HuggingFaceTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HuggingFaceTask {
    type Err = LLMError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|task| task.as_str() == s)
            .ok_or_else(|| {
                LLMError::InvalidConfig(format!(
                    "Got invalid task {s}, currently only {} are supported",
                    Self::ALL.map(|task| task.as_str()).join(", ")
                ))
            })
    }
}
