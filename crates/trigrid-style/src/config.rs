//! Styling service configuration.

use serde::{Deserialize, Serialize};

use crate::error::StyleError;

/// Environment variable holding the service credential.
pub const API_KEY_ENV: &str = "TRIGRID_API_KEY";

/// Default image edit endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/images/edits";

/// Settings for the remote styling service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Image edit endpoint URL.
    pub endpoint: String,
    /// Model name sent with each request.
    pub model: String,
    /// Requested output size, e.g. `"1024x1024"`.
    pub size: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Service credential. Falls back to `TRIGRID_API_KEY` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: "gpt-image-1".to_string(),
            size: "1024x1024".to_string(),
            timeout_secs: 120,
            api_key: None,
        }
    }
}

impl StyleConfig {
    /// Returns the credential from the config, or from `lookup(API_KEY_ENV)`.
    ///
    /// Blank values count as missing.
    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Result<String, StyleError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| lookup(API_KEY_ENV).filter(|k| !k.trim().is_empty()))
            .ok_or(StyleError::MissingApiKey)
    }

    /// Returns the credential from the config or the process environment.
    pub fn resolve_api_key(&self) -> Result<String, StyleError> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }
}
