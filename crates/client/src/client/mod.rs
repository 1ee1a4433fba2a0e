//! Main Datadog API client and its resource methods.
//!
//! [`DatadogClient`] owns the HTTP client, credentials, retry policy and
//! rate-limit state. Each resource submodule adds thin methods that build an
//! [`ApiContext`] and delegate to [`crate::endpoints`].
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `boards`, `screenboards`: Dashboard methods
//! - `monitors`, `downtimes`, `hosts`: Alerting methods
//! - `logs_pipelines`: Logs pipeline and processor methods
//! - `synthetics`, `slo`, `roles`: Remaining resources

pub mod builder;

mod boards;
mod downtimes;
mod hosts;
mod logs_pipelines;
mod monitors;
mod roles;
mod screenboards;
mod slo;
mod synthetics;

use std::time::Duration;

use crate::auth::Credentials;
use crate::endpoints::request::{ApiContext, RetryPolicy};
use crate::metrics::MetricsCollector;
use crate::rate_limit::{RateLimit, RateLimitTracker};

/// Datadog REST API client.
///
/// Use [`DatadogClient::builder()`] to create one:
///
/// ```rust,ignore
/// use datadog_client::DatadogClient;
///
/// let client = DatadogClient::builder()
///     .base_url("https://api.datadoghq.com/api".to_string())
///     .api_key("my-api-key".to_string())
///     .app_key("my-app-key".to_string())
///     .build()?;
///
/// let board = client.get_board("abc-def-ghi").await?;
/// ```
///
/// The client is cheap to share by reference across tasks; all methods take
/// `&self`.
#[derive(Debug)]
pub struct DatadogClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) credentials: Credentials,
    pub(crate) timeout: Duration,
    pub(crate) retry: RetryPolicy,
    pub(crate) metrics: Option<MetricsCollector>,
    pub(crate) rate_limits: RateLimitTracker,
}

impl DatadogClient {
    /// Create a new client builder.
    pub fn builder() -> builder::DatadogClientBuilder {
        builder::DatadogClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Latest rate-limit headers seen for `path` (e.g. `/v1/monitor`).
    pub fn rate_limit(&self, path: &str) -> Option<RateLimit> {
        self.rate_limits.get(path)
    }

    pub(crate) fn context(&self) -> ApiContext<'_> {
        ApiContext {
            http: &self.http,
            base_url: &self.base_url,
            credentials: &self.credentials,
            retry: &self.retry,
            timeout: self.timeout,
            metrics: self.metrics.as_ref(),
            rate_limits: Some(&self.rate_limits),
        }
    }
}
