//! Synthetics test models for the `/v1/synthetics` API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::serde_helpers::NumberOrString;

/// An API or browser check run from managed locations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyntheticsTest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `api` or `browser`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// `http`, `ssl`, `tcp`, ... for API tests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<SyntheticsConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<SyntheticsOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<SyntheticsUser>,
    /// `live` or `paused`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyntheticsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<SyntheticsRequest>,
    #[serde(default)]
    pub assertions: Vec<SyntheticsAssertion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyntheticsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyntheticsAssertion {
    /// `is`, `lessThan`, `contains`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    /// `statusCode`, `responseTime`, `header`, `body`, ...
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Status code, milliseconds, or a string to match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<NumberOrString>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyntheticsOptions {
    /// Seconds between runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_every: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_redirects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_failure_duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_location_failed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_self_signed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry: Option<SyntheticsRetry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyntheticsRetry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    /// Milliseconds between retries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyntheticsUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SyntheticsTestList {
    #[serde(default)]
    pub tests: Vec<SyntheticsTest>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteSyntheticsTestsRequest {
    pub public_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteSyntheticsTestsResponse {
    #[serde(default)]
    pub deleted_tests: Vec<DeletedSyntheticsTest>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeletedSyntheticsTest {
    #[serde(default)]
    pub public_id: String,
    #[serde(default)]
    pub deleted_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SyntheticsStatusRequest {
    pub new_status: String,
}
