//! Service level objective models for the `/v1/slo` API.
//!
//! Responses wrap payloads in a `data` member, alongside an optional `errors`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A reliability target over a rolling timeframe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceLevelObjective {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub thresholds: Vec<SloThreshold>,
    /// `metric` or `monitor`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<i64>,
    /// Good/total event queries for metric SLOs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<SloQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SloThreshold {
    /// `7d`, `30d` or `90d`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning_display: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SloQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numerator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub denominator: Option<String>,
}

/// `{"data": [...]}`, returned by create and list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SloListResponse {
    #[serde(default)]
    pub data: Vec<ServiceLevelObjective>,
    #[serde(default)]
    pub errors: Option<Vec<String>>,
}

/// `{"data": {...}}`, returned by get and update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SloResponse {
    #[serde(default)]
    pub data: Option<ServiceLevelObjective>,
    #[serde(default)]
    pub errors: Option<Vec<String>>,
}

/// Ids removed by a delete, plus per-id errors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SloDeleteResponse {
    #[serde(default)]
    pub data: Vec<String>,
    #[serde(default)]
    pub errors: Option<BTreeMap<String, String>>,
}
