//! JSON codec boundary and shared plumbing for flat tagged-variant models.
//!
//! Responsibilities:
//! - Encode request bodies and decode response bodies, mapping `serde_json`
//!   failures onto the client's error taxonomy.
//! - Provide the discriminator/merge helpers used by the widget and logs
//!   processor codecs, plus the macro that generates their dispatch tables.
//!
//! Does NOT handle:
//! - HTTP (see `endpoints::request`).
//!
//! Invariants:
//! - Empty or whitespace-only input decodes as `{}`.
//! - Decoding is a pure function of its input; no state is shared between calls.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{ClientError, Result};

/// Name of the discriminator key in flat tagged objects.
pub const DISCRIMINATOR_KEY: &str = "type";

/// Encode a value as UTF-8 JSON bytes.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(ClientError::Encode)
}

/// Decode UTF-8 JSON bytes into `T`.
///
/// Malformed JSON yields [`ClientError::Syntax`]; well-formed JSON that does not
/// fit `T` yields [`ClientError::Schema`].
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let bytes: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        bytes
    };
    serde_json::from_slice(bytes).map_err(ClientError::from_decode)
}

/// Remove and return the string discriminator from a flat object.
pub fn take_discriminator(
    map: &mut Map<String, Value>,
    entity: &str,
) -> std::result::Result<String, String> {
    match map.remove(DISCRIMINATOR_KEY) {
        Some(Value::String(tag)) => Ok(tag),
        Some(other) => Err(format!(
            "{entity} `{DISCRIMINATOR_KEY}` must be a string, found {other}"
        )),
        None => Err(format!("missing `{DISCRIMINATOR_KEY}` field in {entity}")),
    }
}

/// Merge `extra` keys into an encoded definition, producing one flat object.
///
/// Keys in `extra` win over keys of the same name in the definition.
pub fn merge_flat(
    definition: Value,
    extra: Map<String, Value>,
) -> std::result::Result<Map<String, Value>, String> {
    let mut map = match definition {
        Value::Object(map) => map,
        other => return Err(format!("definition must encode to an object, got {other}")),
    };
    map.extend(extra);
    Ok(map)
}

/// Generate a discriminator enum and a definition enum with one variant per tag.
///
/// The generated definition enum can convert itself to and from a
/// `serde_json::Value` holding only the shape's own fields; the owning type's
/// `Serialize`/`Deserialize` impls add and strip the common keys.
macro_rules! tagged_definitions {
    (
        $(#[$kind_meta:meta])*
        kind $kind:ident;
        $(#[$def_meta:meta])*
        definition $def:ident;
        entity $entity:literal;
        $($variant:ident($shape:ty) => $tag:literal,)+
    ) => {
        $(#[$kind_meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $kind {
            $($variant,)+
        }

        impl $kind {
            /// Every discriminator, in declaration order.
            pub const ALL: &'static [$kind] = &[$($kind::$variant,)+];

            /// Wire string of this discriminator.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($kind::$variant => $tag,)+
                }
            }
        }

        impl ::std::fmt::Display for $kind {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $kind {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $($tag => Ok($kind::$variant),)+
                    other => Err(format!(concat!("unknown ", $entity, " type `{}`"), other)),
                }
            }
        }

        $(#[$def_meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $def {
            $($variant($shape),)+
        }

        impl $def {
            /// Discriminator selected by this definition.
            pub fn kind(&self) -> $kind {
                match self {
                    $($def::$variant(_) => $kind::$variant,)+
                }
            }

            pub(crate) fn to_value(&self) -> ::serde_json::Result<::serde_json::Value> {
                match self {
                    $($def::$variant(shape) => ::serde_json::to_value(shape),)+
                }
            }

            pub(crate) fn from_value(
                kind: $kind,
                value: ::serde_json::Value,
            ) -> ::serde_json::Result<Self> {
                match kind {
                    $($kind::$variant => ::serde_json::from_value(value).map($def::$variant),)+
                }
            }
        }
    };
}

pub(crate) use tagged_definitions;
