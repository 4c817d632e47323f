//! Application configuration loaded from environment variables.
//!
//! Loaded once at startup and handed to the client, which never reads
//! the environment itself.

use std::env;

/// Default WakaTime API base URL.
pub const DEFAULT_API_HOST: &str = "https://wakatime.com/api/v1";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// WakaTime API key (empty if not set; the service rejects it)
    pub api_key: String,
    /// API base URL, without a trailing slash
    pub api_host: String,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_key: "test_api_key".to_string(),
            api_host: "http://127.0.0.1:8080/api/v1".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("WAKATIME_API_KEY")
            .map(|v| v.trim().to_string())
            .unwrap_or_default();
        if api_key.is_empty() {
            tracing::warn!("WAKATIME_API_KEY not set, sending an empty key");
        }

        let api_host = lookup("WAKATIME_API_HOST")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_HOST.to_string());

        reqwest::Url::parse(&api_host).map_err(|e| ConfigError::Invalid {
            name: "WAKATIME_API_HOST",
            reason: e.to_string(),
        })?;

        Ok(Self { api_key, api_host })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}
