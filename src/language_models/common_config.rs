//! Configuration helpers shared by the provider wrappers.

use secrecy::SecretString;
use serde::{Deserialize, Deserializer};

use super::LLMError;

/// Helpers used by every wrapper while validating its configuration.
pub struct LLMHelpers;

impl LLMHelpers {
    /// Checks that a model name is non-empty and at most 256 characters.
    pub fn validate_model_name(model: &str) -> Result<(), LLMError> {
        if model.is_empty() {
            return Err(LLMError::InvalidConfig(
                "Model name cannot be empty".to_string(),
            ));
        }
        if model.chars().count() > 256 {
            return Err(LLMError::InvalidConfig(
                "Model name too long (max 256 characters)".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the API key from the environment variable, if set and non-empty.
    pub fn get_api_key_from_env(env_var: &str) -> Option<SecretString> {
        std::env::var(env_var)
            .ok()
            .filter(|key| !key.is_empty())
            .map(SecretString::from)
    }

    /// Resolves a credential: an explicitly passed key wins, then the environment.
    ///
    /// `field` is the config field name of the credential, reported back when
    /// neither source provides one.
    pub fn resolve_api_key(
        explicit: Option<SecretString>,
        field: &'static str,
        env_var: &'static str,
    ) -> Result<SecretString, LLMError> {
        explicit
            .or_else(|| Self::get_api_key_from_env(env_var))
            .ok_or(LLMError::MissingCredential { field, env_var })
    }
}

/// Deserializes an optional plain string into a [`SecretString`].
pub(crate) fn deserialize_secret<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.map(SecretString::from))
}
