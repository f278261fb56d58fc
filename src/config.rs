//! Configuration management for the AirVisual client
//!
//! Handles loading configuration from an optional TOML file and `AIRVISUAL_`
//! environment variables, and validates the result before a client is built.

use crate::{AirVisualError, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix, e.g. `AIRVISUAL_API_KEY`
pub const ENV_PREFIX: &str = "AIRVISUAL";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// AirVisual API key
    #[serde(default)]
    pub api_key: String,
    /// Base URL of the API, without a trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://api.airvisual.com".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_user_agent() -> String {
    format!("airvisual-rs/{}", crate::VERSION)
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Configuration with the given key and every other setting defaulted
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables only
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from the given TOML file, overridden by environment variables
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(config_file) = config_path {
            if !config_file.exists() {
                return Err(AirVisualError::config(format!(
                    "Config file not found: {}",
                    config_file.display()
                )));
            }
            builder = builder.add_source(File::from(config_file).format(FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build().map_err(|e| {
            AirVisualError::config(format!("Failed to build configuration: {e}"))
        })?;

        let mut config: ClientConfig = settings.try_deserialize().map_err(|e| {
            AirVisualError::config(format!("Failed to deserialize configuration: {e}"))
        })?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Replace empty values with their defaults
    pub fn apply_defaults(&mut self) {
        if self.base_url.is_empty() {
            self.base_url = default_base_url();
        }
        if self.timeout_seconds == 0 {
            self.timeout_seconds = default_timeout();
        }
        if self.user_agent.is_empty() {
            self.user_agent = default_user_agent();
        }
        while self.base_url.ends_with('/') {
            self.base_url.pop();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(AirVisualError::config(format!(
                "API key is required. Set {ENV_PREFIX}_API_KEY or api_key in the config file."
            )));
        }

        if self.timeout_seconds > 300 {
            return Err(AirVisualError::config(
                "Request timeout cannot exceed 300 seconds",
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(AirVisualError::config(
                "Base URL must be a valid HTTP or HTTPS URL",
            ));
        }

        Ok(())
    }
}
