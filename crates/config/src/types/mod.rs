//! Configuration types for the Datadog client.
//!
//! Types are organized by concern in submodules and re-exported here.

pub mod auth;
pub mod connection;

pub use auth::AuthConfig;
pub use connection::{Config, ConnectionConfig};
