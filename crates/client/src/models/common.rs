//! Common types shared across API models.
//!
//! This module contains the optional-value accessors, the error body shape,
//! and small value types used by multiple resource modules. It does NOT
//! contain resource-specific models.

use serde::{Deserialize, Serialize};

/// Accessors for optional model fields.
///
/// Every optional field is an `Option<T>` serialized with
/// `skip_serializing_if = "Option::is_none"`: `None` omits the key, while
/// `Some(false)`, `Some("")` and `Some(0)` emit the literal.
pub trait Presence<T> {
    /// The value and whether it was present; absent yields `(T::default(), false)`.
    fn get_ok(&self) -> (T, bool);

    /// The value, or the zero value when absent.
    fn get_or_zero(&self) -> T;

    /// Whether the value is present.
    fn has(&self) -> bool;
}

impl<T: Clone + Default> Presence<T> for Option<T> {
    fn get_ok(&self) -> (T, bool) {
        match self {
            Some(value) => (value.clone(), true),
            None => (T::default(), false),
        }
    }

    fn get_or_zero(&self) -> T {
        self.clone().unwrap_or_default()
    }

    fn has(&self) -> bool {
        self.is_some()
    }
}

/// Wrap a value as present.
pub fn wrap<T>(value: T) -> Option<T> {
    Some(value)
}

/// Error body returned by the API on non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrors {
    #[serde(default)]
    pub errors: Vec<String>,
}

/// A search filter applied by logs pipelines and category processors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl FilterQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
        }
    }
}
