//! Centralized constants for the Datadog client workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default API base URL. Endpoint paths (`/v1/...`, `/v2/...`) are appended to it.
pub const DEFAULT_BASE_URL: &str = "https://api.datadoghq.com/api";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default maximum number of retries for failed requests.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Default ceiling on the total time spent retrying a single request, in seconds.
pub const DEFAULT_RETRY_TIMEOUT_SECS: u64 = 60;

/// Default delay before the first retry, in milliseconds.
pub const DEFAULT_INITIAL_BACKOFF_MS: u64 = 500;

/// Default upper bound for a single backoff sleep, in seconds.
pub const DEFAULT_MAX_BACKOFF_SECS: u64 = 10;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Configuration Bounds
// =============================================================================

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Maximum allowed retry ceiling in seconds (1 hour).
pub const MAX_RETRY_TIMEOUT_SECS: u64 = 3600;

/// Maximum allowed number of retries.
pub const MAX_MAX_RETRIES: usize = 10;

// =============================================================================
// Authentication
// =============================================================================

/// Query parameter carrying the API key on every request.
pub const API_KEY_PARAM: &str = "api_key";

/// Query parameter carrying the application key on every request.
pub const APP_KEY_PARAM: &str = "application_key";
