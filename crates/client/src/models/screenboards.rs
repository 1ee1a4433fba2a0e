//! Screenboard models for the `/v1/screen` API.

use serde::{Deserialize, Serialize};

use crate::models::boards::TemplateVariable;
use crate::models::widgets::BoardWidget;
use crate::serde_helpers::NumberOrString;

/// A free-layout board sized in pixels or percent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Screenboard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Pixels (`768`) or percent (`"100%"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<NumberOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<NumberOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_variables: Option<Vec<TemplateVariable>>,
    #[serde(default)]
    pub widgets: Vec<BoardWidget>,
}

impl Screenboard {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            board_title: Some(title.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenboardSummary {
    #[serde(default)]
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScreenboardListResponse {
    #[serde(default)]
    pub screenboards: Vec<ScreenboardSummary>,
}

/// Public link created by sharing a screenboard.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScreenShareResponse {
    #[serde(default)]
    pub board_id: Option<i64>,
    #[serde(default)]
    pub public_url: Option<String>,
}
