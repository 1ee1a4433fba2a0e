//! Client builder for constructing [`DatadogClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, both keys)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, redirects, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`DatadogClient`] methods)
//! - Retry logic for failed requests (handled in [`crate::endpoints::request`])
//!
//! # Invariants
//! - `base_url` and both keys are required and must be non-empty before `build()`
//! - The base URL is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use secrecy::SecretString;

use crate::auth::Credentials;
use crate::client::DatadogClient;
use crate::endpoints::request::RetryPolicy;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::rate_limit::RateLimitTracker;
use datadog_config::{
    Config,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};

/// Builder for creating a new [`DatadogClient`].
///
/// All options have defaults except `base_url` and the two keys.
///
/// ```rust,ignore
/// use datadog_client::DatadogClient;
/// use std::time::Duration;
///
/// let client = DatadogClient::builder()
///     .base_url("https://api.datadoghq.com/api".to_string())
///     .api_key("my-api-key".to_string())
///     .app_key("my-app-key".to_string())
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub struct DatadogClientBuilder {
    base_url: Option<String>,
    api_key: Option<SecretString>,
    app_key: Option<SecretString>,
    skip_verify: bool,
    timeout: Duration,
    retry: RetryPolicy,
    metrics: Option<MetricsCollector>,
}

impl Default for DatadogClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            app_key: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry: RetryPolicy::default(),
            metrics: None,
        }
    }
}

impl DatadogClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API root, e.g. `https://api.datadoghq.com/api`.
    ///
    /// Trailing slashes are removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    pub fn api_key(mut self, key: String) -> Self {
        self.api_key = Some(SecretString::new(key.into()));
        self
    }

    pub fn app_key(mut self, key: String) -> Self {
        self.app_key = Some(SecretString::new(key.into()));
        self
    }

    /// Set both keys from already-protected values.
    pub fn credentials(mut self, api_key: SecretString, app_key: SecretString) -> Self {
        self.api_key = Some(api_key);
        self.app_key = Some(app_key);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this against development proxies. Disabling TLS verification
    /// makes the connection vulnerable to man-in-the-middle attacks.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the per-request timeout. Default is 60 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the whole retry policy.
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    /// Set the maximum number of retries for failed requests.
    ///
    /// Default is 3 retries with exponential backoff starting at 500ms.
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.retry.max_retries = retries;
        self
    }

    /// Set the metrics collector for API call performance tracking.
    ///
    /// When set, the client records request latency, request/retry/error
    /// counters and response decode failures.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Create a client builder from loaded configuration.
    ///
    /// ```rust,ignore
    /// use datadog_client::DatadogClient;
    /// use datadog_config::ConfigLoader;
    ///
    /// let config = ConfigLoader::new().load_dotenv()?.from_env()?.build()?;
    /// let client = DatadogClient::builder().from_config(&config).build()?;
    /// ```
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.api_key = Some(config.auth.api_key.clone());
        self.app_key = Some(config.auth.app_key.clone());
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.retry.max_retries = config.connection.max_retries;
        self.retry.max_elapsed = config.connection.retry_timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// - `"https://api.datadoghq.com/api/"` -> `"https://api.datadoghq.com/api"`
    /// - `"https://api.datadoghq.com/api//"` -> `"https://api.datadoghq.com/api"`
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`DatadogClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided.
    /// Returns [`ClientError::InvalidConfig`] if either key is missing or empty.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<DatadogClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let api_key = self
            .api_key
            .ok_or_else(|| ClientError::InvalidConfig("api_key is required".to_string()))?;
        let app_key = self
            .app_key
            .ok_or_else(|| ClientError::InvalidConfig("app_key is required".to_string()))?;
        let credentials = Credentials::new(api_key, app_key);
        if credentials.is_empty() {
            return Err(ClientError::InvalidConfig(
                "api_key and app_key must not be empty".to_string(),
            ));
        }

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(DatadogClient {
            http,
            base_url,
            credentials,
            timeout: self.timeout,
            retry: self.retry,
            metrics: self.metrics,
            rate_limits: RateLimitTracker::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        let mut config = Config::with_keys("api", "app");
        config.connection.base_url = "https://api.datadoghq.eu/api".to_string();
        config
    }

    #[test]
    fn test_from_config() {
        let client = DatadogClient::builder().from_config(&config()).build();

        assert!(client.is_ok());
        assert_eq!(client.unwrap().base_url(), "https://api.datadoghq.eu/api");
    }

    #[test]
    fn test_from_config_preserves_settings() {
        let mut config = config();
        config.connection.skip_verify = true;
        config.connection.timeout = Duration::from_secs(120);
        config.connection.max_retries = 5;
        config.connection.retry_timeout = Duration::from_secs(30);

        let builder = DatadogClient::builder().from_config(&config);

        assert_eq!(
            builder.base_url,
            Some("https://api.datadoghq.eu/api".to_string())
        );
        assert!(builder.skip_verify);
        assert_eq!(builder.timeout, Duration::from_secs(120));
        assert_eq!(builder.retry.max_retries, 5);
        assert_eq!(builder.retry.max_elapsed, Duration::from_secs(30));
    }

    #[test]
    fn test_missing_app_key() {
        let result = DatadogClient::builder()
            .base_url("https://api.datadoghq.com/api".to_string())
            .api_key("api".to_string())
            .build();

        assert!(matches!(result.unwrap_err(), ClientError::InvalidConfig(_)));
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let result = DatadogClient::builder()
            .base_url("https://api.datadoghq.com/api".to_string())
            .api_key(String::new())
            .app_key("app".to_string())
            .build();

        assert!(matches!(result.unwrap_err(), ClientError::InvalidConfig(_)));
    }

    #[test]
    fn test_retry_policy_replaced() {
        let builder = DatadogClient::builder().retry_policy(RetryPolicy::no_retries());
        assert_eq!(builder.retry.max_retries, 0);
    }

    #[test]
    fn test_normalize_base_url_trailing_slash() {
        let input = "https://api.datadoghq.com/api/".to_string();
        assert_eq!(
            DatadogClientBuilder::normalize_base_url(input),
            "https://api.datadoghq.com/api"
        );
    }

    #[test]
    fn test_normalize_base_url_multiple_trailing_slashes() {
        let input = "https://api.datadoghq.com/api//".to_string();
        assert_eq!(
            DatadogClientBuilder::normalize_base_url(input),
            "https://api.datadoghq.com/api"
        );
    }
}
