//! Shared request path: authentication, retry with backoff, error mapping.
//!
//! Every endpoint goes through [`send_json`], which:
//! - appends the `api_key` and `application_key` query parameters
//! - encodes the body (if any) and sets `Content-Type: application/json`
//! - retries transport failures and 429/502/503/504 with exponential backoff
//! - maps non-2xx responses to [`ClientError`] and decodes 2xx bodies
//!
//! # Invariants
//! - Credential values never appear in logs or error messages.
//! - An empty 2xx body decodes as `{}`.

use std::any::type_name;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, RETRY_AFTER};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::time::Instant;
use tracing::debug;

use crate::auth::{Credentials, redact_url};
use crate::codec;
use crate::error::{ClientError, Result};
use crate::metrics::{ErrorCategory, MetricsCollector};
use crate::models::common::ApiErrors;
use crate::rate_limit::{RateLimit, RateLimitTracker};
use datadog_config::constants::{
    DEFAULT_INITIAL_BACKOFF_MS, DEFAULT_MAX_BACKOFF_SECS, DEFAULT_MAX_RETRIES,
    DEFAULT_RETRY_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS,
};

/// How failed requests are retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the initial attempt.
    pub max_retries: usize,
    /// Delay before the first retry; doubled on each subsequent retry.
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
    /// No retry is scheduled once it would end past this much total time.
    pub max_elapsed: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            initial_backoff: Duration::from_millis(DEFAULT_INITIAL_BACKOFF_MS),
            max_backoff: Duration::from_secs(DEFAULT_MAX_BACKOFF_SECS),
            max_elapsed: Duration::from_secs(DEFAULT_RETRY_TIMEOUT_SECS),
        }
    }
}

impl RetryPolicy {
    /// A policy that sends each request exactly once.
    pub fn no_retries() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Backoff before retry number `attempt + 1`: `initial * 2^attempt`, capped.
    pub fn backoff(&self, attempt: usize) -> Duration {
        let factor = 2u32.saturating_pow(attempt.min(31) as u32);
        self.initial_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }
}

/// Everything an endpoint needs to issue a request.
#[derive(Debug, Clone, Copy)]
pub struct ApiContext<'a> {
    pub http: &'a Client,
    /// Normalized base URL without trailing slash.
    pub base_url: &'a str,
    pub credentials: &'a Credentials,
    pub retry: &'a RetryPolicy,
    /// Per-request timeout configured on `http`, reported in timeout errors.
    pub timeout: Duration,
    pub metrics: Option<&'a MetricsCollector>,
    pub rate_limits: Option<&'a RateLimitTracker>,
}

impl<'a> ApiContext<'a> {
    /// Context with default retry policy and no metrics or rate-limit tracking.
    pub fn new(
        http: &'a Client,
        base_url: &'a str,
        credentials: &'a Credentials,
        retry: &'a RetryPolicy,
    ) -> Self {
        Self {
            http,
            base_url,
            credentials,
            retry,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            metrics: None,
            rate_limits: None,
        }
    }
}

/// Body argument for requests that send none.
pub const NO_BODY: Option<&()> = None;

/// Send a request and decode the JSON response into `T`.
///
/// `path` is appended to the base URL as-is; identifiers in it must already
/// be percent-encoded. Pass [`NO_BODY`] for requests without a body.
pub async fn send_json<B, T>(
    ctx: &ApiContext<'_>,
    method: Method,
    path: &str,
    query: &[(&str, String)],
    body: Option<&B>,
) -> Result<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let url = format!("{}{}", ctx.base_url, path);
    let method_label = method.as_str().to_string();

    let mut builder = ctx
        .http
        .request(method, &url)
        .query(&ctx.credentials.query_pairs())
        .query(query);

    if let Some(body) = body {
        let bytes = codec::encode(body)?;
        builder = builder.header(CONTENT_TYPE, "application/json").body(bytes);
    }

    let response = send_request_with_retry(ctx, builder, path, &method_label).await?;
    let bytes = response.bytes().await?;

    codec::decode::<T>(&bytes).inspect_err(|err| {
        let category = ErrorCategory::from(err);
        debug!(
            path = path,
            model = type_name::<T>(),
            category = category.as_str(),
            "Failed to decode response body"
        );
        if let Some(metrics) = ctx.metrics {
            metrics.record_decode_failure(path, type_name::<T>(), category);
        }
    })
}

/// Unwrap the `data` member of a wrapped response.
pub(crate) fn require_data<T>(data: Option<T>, resource: &str) -> Result<T> {
    data.ok_or_else(|| ClientError::Schema(format!("{resource} response is missing `data`")))
}

/// Execute `builder`, retrying retryable failures per `ctx.retry`.
///
/// Returns the first 2xx response. Retryable failures that outlast the policy
/// surface as [`ClientError::MaxRetriesExceeded`] carrying the last error;
/// with a policy of zero retries the error is returned unwrapped.
pub async fn send_request_with_retry(
    ctx: &ApiContext<'_>,
    builder: RequestBuilder,
    path: &str,
    method: &str,
) -> Result<Response> {
    let policy = ctx.retry;
    let started = Instant::now();
    let mut attempt = 0usize;

    loop {
        let Some(attempt_builder) = builder.try_clone() else {
            debug!("Request builder cannot be cloned, single attempt only");
            return single_attempt(ctx, builder, path, method).await;
        };

        if let Some(metrics) = ctx.metrics {
            metrics.record_request(path, method);
        }
        let request_started = Instant::now();
        let outcome = attempt_builder.send().await;

        let (error, retry_after) = match outcome {
            Ok(response) => {
                let status = response.status().as_u16();
                if let Some(metrics) = ctx.metrics {
                    metrics.record_request_duration(
                        path,
                        method,
                        request_started.elapsed(),
                        Some(status),
                    );
                }
                record_rate_limit(ctx, path, response.headers());

                if response.status().is_success() {
                    if attempt > 0 {
                        debug!(attempt = attempt + 1, path = path, "Request succeeded after retry");
                    }
                    return Ok(response);
                }

                let retry_after = parse_retry_after(response.headers());
                (error_from_response(response).await, retry_after)
            }
            Err(err) => {
                if let Some(metrics) = ctx.metrics {
                    metrics.record_request_duration(path, method, request_started.elapsed(), None);
                }
                (transport_error(ctx, err), None)
            }
        };

        if !error.is_retryable() {
            return Err(record_failure(ctx, path, method, error));
        }

        if policy.max_retries == 0 {
            return Err(record_failure(ctx, path, method, error));
        }

        if attempt >= policy.max_retries {
            debug!(attempts = attempt + 1, path = path, "Max retries exhausted");
            return Err(record_failure(
                ctx,
                path,
                method,
                ClientError::MaxRetriesExceeded(attempt + 1, Box::new(error)),
            ));
        }

        let backoff = policy.backoff(attempt);
        let delay = retry_after.map_or(backoff, |after| after.max(backoff));
        if started.elapsed() + delay > policy.max_elapsed {
            debug!(
                attempts = attempt + 1,
                path = path,
                delay_ms = delay.as_millis() as u64,
                "Retry would exceed the overall retry ceiling"
            );
            return Err(record_failure(
                ctx,
                path,
                method,
                ClientError::MaxRetriesExceeded(attempt + 1, Box::new(error)),
            ));
        }

        debug!(
            attempt = attempt + 1,
            max_retries = policy.max_retries,
            delay_ms = delay.as_millis() as u64,
            path = path,
            error = %error,
            "Retrying request after backoff"
        );
        if let Some(metrics) = ctx.metrics {
            metrics.record_retry(path, method, attempt + 1);
        }

        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}

async fn single_attempt(
    ctx: &ApiContext<'_>,
    builder: RequestBuilder,
    path: &str,
    method: &str,
) -> Result<Response> {
    let response = builder
        .send()
        .await
        .map_err(|err| record_failure(ctx, path, method, transport_error(ctx, err)))?;
    record_rate_limit(ctx, path, response.headers());
    if response.status().is_success() {
        Ok(response)
    } else {
        let error = error_from_response(response).await;
        Err(record_failure(ctx, path, method, error))
    }
}

fn record_failure(ctx: &ApiContext<'_>, path: &str, method: &str, error: ClientError) -> ClientError {
    if let Some(metrics) = ctx.metrics {
        metrics.record_client_error(path, method, &error);
    }
    error
}

fn record_rate_limit(ctx: &ApiContext<'_>, path: &str, headers: &HeaderMap) {
    if let (Some(tracker), Some(limit)) = (ctx.rate_limits, RateLimit::from_headers(headers)) {
        tracker.record(path, limit);
    }
}

fn transport_error(ctx: &ApiContext<'_>, err: reqwest::Error) -> ClientError {
    // reqwest includes the full URL in its errors; drop it so keys cannot leak.
    let err = err.without_url();
    if err.is_timeout() {
        ClientError::Timeout(ctx.timeout)
    } else {
        ClientError::HttpError(err)
    }
}

/// Delta-seconds `Retry-After`; other forms are ignored.
fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

async fn error_from_response(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let url = redact_url(response.url());
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let message = match serde_json::from_str::<ApiErrors>(&body) {
        Ok(parsed) if !parsed.errors.is_empty() => parsed.errors.join("; "),
        _ => body,
    };

    match status {
        401 | 403 => ClientError::Unauthorized(message),
        404 => ClientError::NotFound(format!("{url}: {message}")),
        _ => ClientError::ApiError {
            status,
            url,
            message,
        },
    }
}
