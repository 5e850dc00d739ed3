//! Process configuration.
//!
//! Layered the same way as the rest of the stack's tooling: a local
//! `config.toml` when present, overridden by environment variables.
//! Credential validation is a pre-flight step: a missing or
//! placeholder-shaped key is reported as a typed error before any
//! request is attempted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONFIG_FILE_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub api_key: Option<String>,
    pub api_base: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API credential is not set; set GEMINI_API_KEY or api_key in config.toml")]
    MissingCredential,
    #[error("API credential looks like a placeholder; replace it with a real key")]
    PlaceholderCredential,
}

impl Config {
    pub fn new() -> Self {
        let mut config = Config::default();

        if std::path::Path::new(CONFIG_FILE_PATH).exists() {
            if let Ok(content) = std::fs::read_to_string(CONFIG_FILE_PATH) {
                if let Ok(file_config) = toml::from_str::<Config>(&content) {
                    config = file_config;
                }
            }
        }

        if let Ok(api_key) = std::env::var("GEMINI_API_KEY") {
            config.api_key = Some(api_key);
        }
        if let Ok(api_base) = std::env::var("GEMINI_API_BASE") {
            config.api_base = Some(api_base);
        }
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            config.model = Some(model);
        }
        config
    }

    /// The validated API credential, or a typed configuration error.
    pub fn credential(&self) -> Result<&str, ConfigError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(ConfigError::MissingCredential)?;
        if key.trim().is_empty() {
            return Err(ConfigError::MissingCredential);
        }
        if is_placeholder(key) {
            return Err(ConfigError::PlaceholderCredential);
        }
        Ok(key)
    }
}

// Shape-based detection: template tokens users are told to replace,
// rather than equality against any one sample key.
fn is_placeholder(value: &str) -> bool {
    let upper = value.trim().to_ascii_uppercase();
    upper == "CHANGEME"
        || upper.contains("YOUR_API_KEY")
        || upper.contains("YOUR-API-KEY")
        || upper.contains("REPLACE")
        || upper.contains("PLACEHOLDER")
}
