//! Enhancer configuration domain models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnhancerConfig {
    /// Gemini API configuration.
    #[serde(default)]
    pub gemini: GeminiApiConfig,
}

impl EnhancerConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.gemini.validate()
    }
}

/// Gemini API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiApiConfig {
    /// Base URL of the Generative Language API, without the `models/...` suffix.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model used for `generateContent`.
    #[serde(default = "default_model")]
    pub model: String,
    /// Optional request timeout in seconds. No timeout is applied when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for GeminiApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            timeout_secs: None,
            api_key_env: default_api_key_env(),
        }
    }
}

impl GeminiApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("model must not be empty".to_string()));
        }
        if self.timeout_secs == Some(0) {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.api_key_env.trim().is_empty() {
            return Err(AppError::InvalidConfig("api_key_env must not be empty".to_string()));
        }
        Ok(())
    }

    /// Full `generateContent` endpoint for the configured model.
    pub fn generate_content_url(&self) -> Result<Url, AppError> {
        let base = self.api_url.as_str().trim_end_matches('/');
        let endpoint = format!("{}/models/{}:generateContent", base, self.model);
        Url::parse(&endpoint).map_err(|e| {
            AppError::InvalidConfig(format!("Invalid endpoint '{}': {}", endpoint, e))
        })
    }
}

fn default_api_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}
