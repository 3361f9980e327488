//! Gemini analysis service configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_model() -> String {
    String::from("gemini-3-flash-preview")
}

fn default_endpoint() -> String {
    String::from("https://generativelanguage.googleapis.com")
}

const fn default_timeout_secs() -> u64 {
    120
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// API key sent as `x-goog-api-key`.
    #[serde(default)]
    pub api_key: String,

    /// Model identifier used in the `generateContent` path.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the Generative Language API.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeminiConfig {
    /// Check if the Gemini config has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Ensure an analysis call can be attempted.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] without an API key and
    /// [`ConfigError::InvalidValue`] for an empty model, an endpoint that is
    /// not an http(s) URL, or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "gemini".into(),
            });
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "gemini.model".into(),
                reason: "model identifier must not be empty".into(),
            });
        }
        let endpoint = self.endpoint.trim();
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                field: "gemini.endpoint".into(),
                reason: format!("expected an http(s) URL, got {endpoint:?}"),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "gemini.timeout_secs".into(),
                reason: "timeout must be at least one second".into(),
            });
        }
        Ok(())
    }
}
