//! Logs pipeline models for the `/v1/logs/config/pipelines` API.

use serde::{Deserialize, Serialize};

use crate::models::common::FilterQuery;
use crate::models::logs_processors::LogsProcessor;

/// A filtered, ordered chain of processors applied to incoming logs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogsPipeline {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// `pipeline` for custom pipelines; integration pipelines report their own.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterQuery>,
    #[serde(default)]
    pub processors: Vec<LogsProcessor>,
}

impl LogsPipeline {
    pub fn new(name: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            is_enabled: Some(true),
            filter: Some(FilterQuery::new(query)),
            ..Self::default()
        }
    }
}

/// Order in which pipelines are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogsPipelineOrder {
    #[serde(default)]
    pub pipeline_ids: Vec<String>,
}
