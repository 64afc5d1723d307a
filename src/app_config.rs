use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and overlaying the environment credential.
///
/// Environment variable holding the model-service credential. The key is
/// never read from (or written to) the configuration file.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Model provider config
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file, falling back to defaults when the
    /// file does not exist, then overlay the environment credential.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .map_err(|e| anyhow!("Failed to read config file {:?}: {}", path, e))?;
            serde_json::from_str(&content)
                .map_err(|e| anyhow!("Failed to parse config file {:?}: {}", path, e))?
        } else {
            Config::default()
        };

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            config.provider.api_key = key;
        }

        Ok(config)
    }

    /// Validate the configuration. A missing credential is fatal at startup.
    pub fn validate(&self) -> Result<()> {
        if self.provider.api_key.trim().is_empty() {
            return Err(anyhow!(
                "Missing model-service credential: set the {} environment variable",
                API_KEY_ENV
            ));
        }

        Url::parse(&self.provider.endpoint)
            .map_err(|e| anyhow!("Invalid endpoint '{}': {}", self.provider.endpoint, e))?;

        if !(0.0..=2.0).contains(&self.provider.temperature) {
            return Err(anyhow!(
                "Temperature {} is outside the supported range 0.0-2.0",
                self.provider.temperature
            ));
        }

        Ok(())
    }
}

/// Provider configuration wrapper
///
/// The model name and the JSON response format are fixed constants of the
/// service contract, not configuration; see `providers::groq`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    // @field: Service URL (OpenAI-compatible base)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    // @field: Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    // @field: Retry attempts after the first failure
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,

    // @field: Base backoff in milliseconds, doubled per retry
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,

    // @field: API key, environment-sourced only
    #[serde(skip)]
    pub api_key: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
            retry_count: default_retry_count(),
            retry_backoff_ms: default_retry_backoff_ms(),
            api_key: String::new(),
        }
    }
}

fn default_endpoint() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_temperature() -> f32 {
    0.6
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_retry_count() -> u32 {
    2
}

fn default_retry_backoff_ms() -> u64 {
    500
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching log crate filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}
