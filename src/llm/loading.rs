use std::{fs, path::Path};

use log::debug;
use serde_json::Value;

use crate::language_models::{LLMError, LLM};

use super::registry::lookup;

/// Config key naming the provider of a saved model.
pub const LLM_TYPE_KEY: &str = "_type";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self, LLMError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(ConfigFormat::Json),
            #[cfg(feature = "yaml")]
            Some("yaml") => Ok(ConfigFormat::Yaml),
            _ => Err(LLMError::UnsupportedFileType(path.display().to_string())),
        }
    }
}

/// Creates an LLM wrapper from a `_type`-tagged config.
///
/// The `_type` entry selects the provider through the registry; the remaining
/// entries are handed to that provider's constructor.
///
/// # Example
/// ```rust
/// use langchain_llms::llm::load_llm_from_config;
/// use langchain_llms::LLM;
/// use serde_json::json;
///
/// let llm = load_llm_from_config(&json!({
///     "_type": "huggingface_pipeline",
///     "model_id": "gpt2",
/// }))
/// .unwrap();
/// assert_eq!(llm.llm_type().as_str(), "huggingface_pipeline");
/// ```
pub fn load_llm_from_config(config: &Value) -> Result<Box<dyn LLM>, LLMError> {
    let mut config = match config {
        Value::Object(map) => map.clone(),
        other => {
            return Err(LLMError::InvalidConfig(format!(
                "LLM config must be an object, got {other}"
            )))
        }
    };

    let llm_type = match config.remove(LLM_TYPE_KEY) {
        Some(Value::String(llm_type)) => llm_type,
        Some(other) => {
            return Err(LLMError::InvalidConfig(format!(
                "`{LLM_TYPE_KEY}` must be a string, got {other}"
            )))
        }
        None => return Err(LLMError::MissingLLMType),
    };

    let class = lookup(&llm_type)?;
    debug!("Loading {} LLM from config", class.name());
    class.instantiate(&Value::Object(config))
}

/// Loads an LLM wrapper from a `.json` (or, with the `yaml` feature, `.yaml`) file.
pub fn load_llm<P: AsRef<Path>>(path: P) -> Result<Box<dyn LLM>, LLMError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let contents = fs::read_to_string(path)?;

    let config: Value = match format {
        ConfigFormat::Json => serde_json::from_str(&contents)?,
        #[cfg(feature = "yaml")]
        ConfigFormat::Yaml => serde_yaml::from_str(&contents)?,
    };
    load_llm_from_config(&config)
}

pub(crate) fn save_llm_config(config: &Value, path: &Path) -> Result<(), LLMError> {
    let format = ConfigFormat::from_path(path)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let contents = match format {
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        #[cfg(feature = "yaml")]
        ConfigFormat::Yaml => serde_yaml::to_string(config)?,
    };
    debug!("Saving LLM config to {}", path.display());
    fs::write(path, contents)?;
    Ok(())
}
