//! Tests for the configuration loader builder.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable `apply_env` reads, unset.
pub fn cleared_env() -> Vec<(&'static str, Option<&'static str>)> {
    vec![
        ("DATADOG_HOST", None),
        ("DATADOG_API_KEY", None),
        ("DATADOG_APP_KEY", None),
        ("DATADOG_SKIP_VERIFY", None),
        ("DATADOG_TIMEOUT", None),
        ("DATADOG_MAX_RETRIES", None),
        ("DATADOG_RETRY_TIMEOUT", None),
    ]
}
