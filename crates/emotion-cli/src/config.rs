//! Configuration file loading.

use anyhow::{Context, Result};
use emotion_classifier::ClassifierConfig;
use serde::Deserialize;
use std::path::Path;

/// Default host the web server binds to.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default web server port.
pub const DEFAULT_PORT: u16 = 5000;

/// Full application configuration, as read from a TOML file.
///
/// ```toml
/// [server]
/// host = "0.0.0.0"
/// port = 8080
///
/// [classifier]
/// url = "http://localhost:9000/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict"
/// timeout_secs = 5
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub classifier: ClassifierConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// Load from `path`, or fall back to defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&raw)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}
