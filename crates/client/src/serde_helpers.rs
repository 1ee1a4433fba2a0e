//! Serde helpers for fields the API types inconsistently.
//!
//! Responsibilities:
//! - Provide flexible scalar types that accept several JSON shapes for one
//!   logical field and normalize them to a canonical string.
//! - Keep parsing behavior centralized so model definitions stay readable.
//!
//! Explicitly does NOT handle:
//! - Validating higher-level semantics (ranges, units, percent syntax).
//!
//! Invariants / assumptions:
//! - Decoding never fails because the wire value used a different accepted
//!   shape; it fails only when no accepted shape matches, with serde's
//!   `invalid type` error naming the shape that was found.
//! - Encoding always emits the canonical form as a JSON string, so a numeric
//!   input `1` is re-encoded as `"1"`.
//! - Number literals keep their exact text (`1.50` stays `1.50`); this relies
//!   on serde_json's `arbitrary_precision` feature.
//! - The `opt_*_from_string_or_number` helpers are for fields the API treats
//!   as numbers; they accept a numeric string but keep a numeric wire type.

use serde::de::{self, Error as _, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use std::fmt;

/// A value sent as either a JSON number or a JSON string.
///
/// Numbers keep the literal text they arrived with (`5`, `-3`, `1.50`,
/// `1e3`, integers wider than 64 bits), strings are stored verbatim
/// (`"100%"`, `"*"`, `"auto"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NumberOrString(String);

impl NumberOrString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Parse the canonical form as an integer, if it is one.
    pub fn as_i64(&self) -> Option<i64> {
        self.0.parse().ok()
    }

    /// Parse the canonical form as a float, if it is one.
    pub fn as_f64(&self) -> Option<f64> {
        self.0.parse().ok()
    }
}

impl From<&str> for NumberOrString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NumberOrString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<i64> for NumberOrString {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for NumberOrString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for NumberOrString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NumberOrString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // `Value` understands serde_json's arbitrary-precision number token, so
        // `Number`'s `Display` gives back the literal exactly as it was sent.
        match Value::deserialize(deserializer)? {
            Value::Number(number) => Ok(NumberOrString(number.to_string())),
            Value::String(text) => Ok(NumberOrString(text)),
            other => Err(de::Error::invalid_type(
                unexpected(&other),
                &"a number or a string",
            )),
        }
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(flag) => Unexpected::Bool(*flag),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(text) => Unexpected::Str(text),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

/// A flag sent as either a JSON boolean or a JSON string.
///
/// Booleans are canonicalized to `"true"` / `"false"`; strings are stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BoolOrString(String);

impl BoolOrString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interpret the canonical form as a boolean, if it spells one.
    pub fn as_bool(&self) -> Option<bool> {
        match self.0.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }
}

impl From<bool> for BoolOrString {
    fn from(value: bool) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for BoolOrString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for BoolOrString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for BoolOrString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BoolOrString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Bool(flag) => Ok(BoolOrString(flag.to_string())),
            Value::String(text) => Ok(BoolOrString(text)),
            other => Err(de::Error::invalid_type(
                unexpected(&other),
                &"a boolean or a string",
            )),
        }
    }
}

/// Optional JSON number that some payloads send as a numeric string.
///
/// Unlike [`NumberOrString`] the field stays numeric on the wire: `"80.5"`
/// decodes to the number `80.5` and is re-encoded without quotes.
pub fn opt_number_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<Number>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => Ok(Some(number)),
        Some(Value::String(text)) => serde_json::from_str::<Number>(text.trim())
            .map(Some)
            .map_err(|_| de::Error::invalid_value(Unexpected::Str(&text), &"a numeric string")),
        Some(other) => Err(de::Error::invalid_type(
            unexpected(&other),
            &"a number or a numeric string",
        )),
    }
}

pub fn opt_i64_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = opt_number_from_string_or_number(deserializer)? else {
        return Ok(None);
    };
    number
        .as_i64()
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("expected an integer, found {number}")))
}
