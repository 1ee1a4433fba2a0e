//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `DATADOG_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_secs(var: &str, raw: &str) -> Result<Duration, ConfigError> {
    raw.parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be a number of seconds".to_string(),
        })
}

/// Apply environment variable configuration to the loader.
///
/// Values already set on the loader through builder methods are kept.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none("DATADOG_HOST") {
        loader.set_base_url_if_unset(url);
    }
    if let Some(key) = env_var_or_none("DATADOG_API_KEY") {
        loader.set_api_key_if_unset(SecretString::new(key.into()));
    }
    if let Some(key) = env_var_or_none("DATADOG_APP_KEY") {
        loader.set_app_key_if_unset(SecretString::new(key.into()));
    }
    if let Some(skip) = env_var_or_none("DATADOG_SKIP_VERIFY") {
        let skip = skip.parse().map_err(|_| ConfigError::InvalidValue {
            var: "DATADOG_SKIP_VERIFY".to_string(),
            message: "must be true or false".to_string(),
        })?;
        loader.set_skip_verify_if_unset(skip);
    }
    if let Some(timeout) = env_var_or_none("DATADOG_TIMEOUT") {
        loader.set_timeout_if_unset(parse_secs("DATADOG_TIMEOUT", &timeout)?);
    }
    if let Some(retries) = env_var_or_none("DATADOG_MAX_RETRIES") {
        let value: usize = retries.parse().map_err(|_| ConfigError::InvalidValue {
            var: "DATADOG_MAX_RETRIES".to_string(),
            message: "must be a non-negative integer".to_string(),
        })?;
        loader.set_max_retries_if_unset(value);
    }
    if let Some(ceiling) = env_var_or_none("DATADOG_RETRY_TIMEOUT") {
        loader.set_retry_timeout_if_unset(parse_secs("DATADOG_RETRY_TIMEOUT", &ceiling)?);
    }
    Ok(())
}
