//! Integration tests for configuration loading through the public API.

use datadog_config::constants::{DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES};
use datadog_config::{ConfigError, ConfigLoader, env_var_or_none};
use secrecy::ExposeSecret;
use std::time::Duration;

#[test]
fn test_builder_values_produce_config() {
    let config = ConfigLoader::new()
        .with_base_url("https://api.datadoghq.eu/api/".to_string())
        .with_api_key("api".to_string())
        .with_app_key("app".to_string())
        .build()
        .expect("should build with explicit keys");

    assert_eq!(config.connection.base_url, "https://api.datadoghq.eu/api");
    assert_eq!(config.auth.api_key.expose_secret(), "api");
    assert_eq!(config.auth.app_key.expose_secret(), "app");
}

#[test]
fn test_default_base_url_and_retries() {
    let config = ConfigLoader::new()
        .with_api_key("api".to_string())
        .with_app_key("app".to_string())
        .build()
        .unwrap();

    assert_eq!(config.connection.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.connection.max_retries, DEFAULT_MAX_RETRIES);
}

#[test]
fn test_env_var_or_none_exported() {
    let _result: Option<String> = env_var_or_none("DATADOG_INTEGRATION_TEST_UNSET");
}

#[test]
fn test_missing_app_key_error() {
    let result = ConfigLoader::new().with_api_key("api".to_string()).build();
    assert!(matches!(result, Err(ConfigError::MissingAppKey)));
}

#[test]
fn test_missing_api_key_error() {
    let result = ConfigLoader::new().with_app_key("app".to_string()).build();
    assert!(matches!(result, Err(ConfigError::MissingApiKey)));
}

#[test]
fn test_zero_timeout_rejected() {
    let result = ConfigLoader::new()
        .with_api_key("api".to_string())
        .with_app_key("app".to_string())
        .with_timeout(Duration::ZERO)
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
}

#[test]
fn test_non_http_scheme_rejected() {
    let result = ConfigLoader::new()
        .with_base_url("ftp://api.datadoghq.com".to_string())
        .with_api_key("api".to_string())
        .with_app_key("app".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}
