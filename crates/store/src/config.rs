//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SDFM_DATA_DIR` - Directory for the local persisted blobs
//!   (default: `.sdfm`)
//! - `SDFM_SERVICE_URL` - Base URL of the hosted catalog service; enables
//!   the remote backend variant
//! - `SDFM_SERVICE_KEY` - API key for the hosted catalog service (required
//!   when `SDFM_SERVICE_URL` is set)

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Store application configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the local persisted blobs.
    pub data_dir: PathBuf,
    /// Hosted catalog service, when configured.
    pub remote: Option<RemoteConfig>,
}

/// Hosted catalog service configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct RemoteConfig {
    /// Service base URL.
    pub endpoint: String,
    /// Service API key.
    pub api_key: SecretString,
}

impl std::fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the service URL is set without a key, or a
    /// variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("SDFM_DATA_DIR", ".sdfm"));

        let remote = match get_optional_env("SDFM_SERVICE_URL") {
            Some(endpoint) => {
                url::Url::parse(&endpoint).map_err(|e| {
                    ConfigError::InvalidEnvVar("SDFM_SERVICE_URL".to_string(), e.to_string())
                })?;
                let api_key = get_optional_env("SDFM_SERVICE_KEY")
                    .map(SecretString::from)
                    .ok_or_else(|| ConfigError::MissingEnvVar("SDFM_SERVICE_KEY".to_string()))?;
                Some(RemoteConfig { endpoint, api_key })
            }
            None => None,
        };

        Ok(Self { data_dir, remote })
    }
}

fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
