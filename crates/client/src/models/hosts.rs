//! Host models for the `/v1/host` and `/v1/hosts` APIs.

use serde::{Deserialize, Serialize};

/// Body of a host mute request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostMuteSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// POSIX timestamp at which the mute ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
    /// Replace an existing mute instead of failing.
    #[serde(rename = "override", skip_serializing_if = "Option::is_none")]
    pub override_existing: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostMuteResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostTotals {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_up: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_active: Option<i64>,
}
