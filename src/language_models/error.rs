use serde_json::Error as SerdeJsonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LLMError {
    #[error("Unknown LLM provider '{provider}'. Available providers: {available}")]
    ProviderNotFound { provider: String, available: String },

    #[error("Must specify an LLM type in config under the `_type` key")]
    MissingLLMType,

    #[error(
        "Did not find {field}, please add an environment variable `{env_var}` which contains it, or pass `{field}` as a named parameter."
    )]
    MissingCredential {
        field: &'static str,
        env_var: &'static str,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unsupported file type: {0}. File type must be json or yaml")]
    UnsupportedFileType(String),

    #[error("JSON serialization/deserialization error: {0}")]
    SerdeError(#[from] SerdeJsonError),

    #[cfg(feature = "yaml")]
    #[error("YAML serialization/deserialization error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
