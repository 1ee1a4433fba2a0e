//! Connection configuration types for the Datadog client.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeouts, retries).
//! - Define the main `Config` structure combining connection and credentials.
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - Default values come from `constants`, not magic numbers.

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS,
};
use crate::types::auth::AuthConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the API, without trailing slash (e.g. `https://api.datadoghq.com/api`)
    pub base_url: String,
    /// Whether to skip TLS verification (for intercepting proxies in development)
    #[serde(default)]
    pub skip_verify: bool,
    /// Per-request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Maximum number of retries for failed requests
    pub max_retries: usize,
    /// Ceiling on the total time spent retrying one request (serialized as seconds)
    #[serde(with = "duration_seconds", default = "default_retry_timeout")]
    pub retry_timeout: Duration,
}

fn default_retry_timeout() -> Duration {
    Duration::from_secs(DEFAULT_RETRY_TIMEOUT_SECS)
}

impl ConnectionConfig {
    /// Connection settings with defaults for everything except the base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_timeout: default_retry_timeout(),
        }
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Credentials
    pub auth: AuthConfig,
}

impl Config {
    /// Create a config for the default API host with the given keys.
    pub fn with_keys(api_key: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            connection: ConnectionConfig::default(),
            auth: AuthConfig::new(api_key, app_key),
        }
    }
}
