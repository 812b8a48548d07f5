//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.
//!
//! The judge API key is deliberately only accepted through the environment;
//! there is no baked-in default for it.

use std::env;
use std::sync::LazyLock;
use std::time::Duration;

use crate::constants::{
    DEFAULT_JUDGE_API_HOST, DEFAULT_JUDGE_API_URL, DEFAULT_JUDGE_POLL_INTERVAL_MS,
    DEFAULT_JUDGE_POLL_MAX_ATTEMPTS, DEFAULT_JUDGE_REQUEST_TIMEOUT_SECS, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub judge: JudgeConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Remote execution service configuration
#[derive(Debug, Clone)]
pub struct JudgeConfig {
    /// Base URL of the judge API
    pub api_url: String,
    /// Host header value expected by the judge API gateway
    pub api_host: String,
    /// API key; required, never defaulted
    pub api_key: String,
    /// Per-request timeout for judge API calls
    pub request_timeout_secs: u64,
    /// Delay between status polls
    pub poll_interval_ms: u64,
    /// Maximum number of status polls per submission
    pub poll_max_attempts: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            judge: JudgeConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .or_else(|_| env::var("PORT"))
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl JudgeConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: env::var("JUDGE_API_URL")
                .unwrap_or_else(|_| DEFAULT_JUDGE_API_URL.to_string()),
            api_host: env::var("JUDGE_API_HOST")
                .unwrap_or_else(|_| DEFAULT_JUDGE_API_HOST.to_string()),
            api_key: env::var("JUDGE_API_KEY")
                .map_err(|_| ConfigError::Missing("JUDGE_API_KEY".to_string()))?,
            request_timeout_secs: env::var("JUDGE_REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_JUDGE_REQUEST_TIMEOUT_SECS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("JUDGE_REQUEST_TIMEOUT_SECS".to_string()))?,
            poll_interval_ms: env::var("JUDGE_POLL_INTERVAL_MS")
                .unwrap_or_else(|_| DEFAULT_JUDGE_POLL_INTERVAL_MS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("JUDGE_POLL_INTERVAL_MS".to_string()))?,
            poll_max_attempts: env::var("JUDGE_POLL_MAX_ATTEMPTS")
                .unwrap_or_else(|_| DEFAULT_JUDGE_POLL_MAX_ATTEMPTS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("JUDGE_POLL_MAX_ATTEMPTS".to_string()))?,
        })
    }

    /// Per-request timeout as a [`Duration`]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Poll interval as a [`Duration`]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_judge_config() -> JudgeConfig {
        JudgeConfig {
            api_url: DEFAULT_JUDGE_API_URL.to_string(),
            api_host: DEFAULT_JUDGE_API_HOST.to_string(),
            api_key: "test-key".to_string(),
            request_timeout_secs: DEFAULT_JUDGE_REQUEST_TIMEOUT_SECS,
            poll_interval_ms: DEFAULT_JUDGE_POLL_INTERVAL_MS,
            poll_max_attempts: DEFAULT_JUDGE_POLL_MAX_ATTEMPTS,
        }
    }

    #[test]
    fn test_default_values() {
        let server = ServerConfig {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: "info".to_string(),
        };
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 3000);
    }

    #[test]
    fn test_judge_durations() {
        let judge = test_judge_config();
        assert_eq!(judge.request_timeout(), Duration::from_secs(10));
        assert_eq!(judge.poll_interval(), Duration::from_millis(1000));
        assert_eq!(judge.poll_max_attempts, 10);
    }
}
