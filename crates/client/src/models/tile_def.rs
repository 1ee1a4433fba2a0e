//! Graph tile definitions embedded in board widgets.
//!
//! A tile definition describes what a graph-like widget plots: the metric
//! requests, event overlays, markers and visual style.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::{BoolOrString, NumberOrString};

/// What a graph widget plots and how.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TileDef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<TileDefEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markers: Option<Vec<TileDefMarker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requests: Option<Vec<TileDefRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viz: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoscale: Option<BoolOrString>,
    /// Either a digit count or a percent string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<NumberOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,

    // Hostmap-only fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_group_hosts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_metric_hosts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<TileDefStyle>,
}

/// Event overlay query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TileDefEvent {
    #[serde(rename = "q", skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

/// Horizontal marker line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TileDefMarker {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// One metric, log or process query plotted by a tile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TileDefRequest {
    #[serde(rename = "q", skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_filters: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<TileDefRequestStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_formats: Option<Vec<ConditionalFormat>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_col: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub increase_good: Option<bool>,
}

impl TileDefRequest {
    /// Request plotting a single metric query.
    pub fn metric_query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TileDefRequestStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
}

/// Threshold-based coloring applied to a request's value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionalFormat {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_bg_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<NumberOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invert: Option<BoolOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Hostmap fill palette.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TileDefStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette_flip: Option<BoolOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_min: Option<NumberOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_max: Option<NumberOrString>,
}
