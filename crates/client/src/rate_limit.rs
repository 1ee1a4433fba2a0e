//! Rate-limit bookkeeping from `X-RateLimit-*` response headers.
//!
//! The API reports a budget per endpoint. The latest values seen for each
//! request path are kept so callers can pace themselves.
//!
//! Paths carry resource ids, so the tracker holds at most
//! [`MAX_TRACKED_PATHS`] entries and drops the least recently updated one
//! when a new path arrives at capacity.

use std::collections::HashMap;
use std::sync::Mutex;

use reqwest::header::HeaderMap;

const HEADER_LIMIT: &str = "x-ratelimit-limit";
const HEADER_PERIOD: &str = "x-ratelimit-period";
const HEADER_REMAINING: &str = "x-ratelimit-remaining";
const HEADER_RESET: &str = "x-ratelimit-reset";

/// Upper bound on distinct paths held by a [`RateLimitTracker`].
pub const MAX_TRACKED_PATHS: usize = 256;

/// Rate-limit state reported by the API for one endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests allowed per period.
    pub limit: Option<u64>,
    /// Period length in seconds.
    pub period: Option<u64>,
    pub remaining: Option<u64>,
    /// Seconds until the budget resets.
    pub reset: Option<u64>,
}

impl RateLimit {
    /// Read the rate-limit headers; `None` when the response carried none.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let read = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.trim().parse::<u64>().ok())
        };

        let limit = Self {
            limit: read(HEADER_LIMIT),
            period: read(HEADER_PERIOD),
            remaining: read(HEADER_REMAINING),
            reset: read(HEADER_RESET),
        };

        if limit == Self::default() {
            None
        } else {
            Some(limit)
        }
    }
}

/// Latest [`RateLimit`] per request path.
#[derive(Debug)]
pub struct RateLimitTracker {
    capacity: usize,
    state: Mutex<TrackerState>,
}

#[derive(Debug, Default)]
struct TrackerState {
    next_seq: u64,
    /// Path to (update sequence, limit).
    limits: HashMap<String, (u64, RateLimit)>,
}

impl Default for RateLimitTracker {
    fn default() -> Self {
        Self::with_capacity(MAX_TRACKED_PATHS)
    }
}

impl RateLimitTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            state: Mutex::new(TrackerState::default()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, TrackerState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn record(&self, path: &str, limit: RateLimit) {
        let mut state = self.lock();
        if !state.limits.contains_key(path) && state.limits.len() >= self.capacity {
            let oldest = state
                .limits
                .iter()
                .min_by_key(|(_, (seq, _))| *seq)
                .map(|(key, _)| key.clone());
            if let Some(oldest) = oldest {
                tracing::trace!(path = %oldest, "Evicting rate limit entry");
                state.limits.remove(&oldest);
            }
        }
        let seq = state.next_seq;
        state.next_seq += 1;
        state.limits.insert(path.to_string(), (seq, limit));
    }

    pub fn get(&self, path: &str) -> Option<RateLimit> {
        self.lock().limits.get(path).map(|(_, limit)| limit.clone())
    }

    /// Snapshot of every path currently held.
    pub fn snapshot(&self) -> HashMap<String, RateLimit> {
        self.lock()
            .limits
            .iter()
            .map(|(path, (_, limit))| (path.clone(), limit.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
