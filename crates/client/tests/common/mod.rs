//! Common test utilities for integration tests.
//!
//! Shared helpers and re-exports for testing the Datadog client against a
//! wiremock server. Test files pull these in with `mod common; use common::*;`.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Clients built here authenticate with [`API_KEY`] and [`APP_KEY`]

use std::time::Duration;

#[allow(unused_imports)]
pub use datadog_client::testing::load_fixture;

#[allow(unused_imports)]
pub use datadog_client::{ClientError, DatadogClient, RetryPolicy};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "test-api-key-abc123";
pub const APP_KEY: &str = "test-app-key-def456";

/// Client pointed at `server` with the default retry policy.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> DatadogClient {
    client_with_policy(server, RetryPolicy::default())
}

/// Client pointed at `server` that sends every request exactly once.
#[allow(dead_code)]
pub fn client_without_retries(server: &MockServer) -> DatadogClient {
    client_with_policy(server, RetryPolicy::no_retries())
}

#[allow(dead_code)]
pub fn client_with_policy(server: &MockServer, policy: RetryPolicy) -> DatadogClient {
    DatadogClient::builder()
        .base_url(server.uri())
        .api_key(API_KEY.to_string())
        .app_key(APP_KEY.to_string())
        .timeout(Duration::from_secs(300))
        .retry_policy(policy)
        .build()
        .expect("client should build")
}

/// Advance Tokio's paused clock and yield so sleepers can observe the change.
#[allow(dead_code)]
pub async fn advance_and_yield(duration: Duration) {
    tokio::time::advance(duration).await;
    tokio::task::yield_now().await;
}

/// Assert that a task has not completed after yielding to the scheduler.
#[allow(dead_code)]
pub async fn assert_pending<T>(handle: &tokio::task::JoinHandle<T>, context: &str) {
    tokio::task::yield_now().await;
    assert!(!handle.is_finished(), "Expected pending task: {}", context);
}
