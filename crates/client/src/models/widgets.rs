//! Board widget models.
//!
//! Responsibilities:
//! - Model the widget variants a board can hold, one concrete shape per
//!   `type` discriminator.
//! - Convert between the flat wire object (`type`, layout keys and the
//!   definition's own keys side by side) and [`BoardWidget`].
//!
//! Does NOT handle:
//! - Board-level fields (see `boards` and `screenboards`).
//!
//! Invariants:
//! - Decoding reads `type` before the payload; an unrecognized value is a
//!   schema error naming it, never a fallback variant.
//! - Encoding always writes `type` next to the definition's fields, never
//!   nested under a sub-object.
//! - A group's `widgets` is always emitted, as `[]` when empty.

use std::collections::BTreeMap;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{self, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::codec::{self, DISCRIMINATOR_KEY, tagged_definitions};
use crate::models::tile_def::TileDef;
use crate::serde_helpers::NumberOrString;

const LAYOUT_KEYS: [&str; 4] = ["x", "y", "width", "height"];

/// Position and size of a widget on its board grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WidgetLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
}

impl WidgetLayout {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width: Some(width),
            height: Some(height),
        }
    }

    fn take_from(map: &mut Map<String, Value>) -> serde_json::Result<Self> {
        let mut layout = Map::new();
        for key in LAYOUT_KEYS {
            if let Some(value) = map.remove(key) {
                layout.insert(key.to_string(), value);
            }
        }
        serde_json::from_value(Value::Object(layout))
    }
}

/// Title settings shared by most widget shapes.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WidgetTitle {
    /// Whether the title is shown.
    #[serde(rename = "title", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(rename = "title_text", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "title_align", skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(rename = "title_size", skip_serializing_if = "Option::is_none")]
    pub size: Option<NumberOrString>,
}

impl WidgetTitle {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            enabled: Some(true),
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

/// Time window a widget displays.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WidgetTime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_span: Option<String>,
}

impl WidgetTime {
    pub fn live_span(span: impl Into<String>) -> Self {
        Self {
            live_span: Some(span.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FreeTextDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimeseriesDefinition {
    #[serde(flatten)]
    pub title: WidgetTitle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<WidgetTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tile_def: Option<TileDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_size: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QueryValueDefinition {
    #[serde(flatten)]
    pub title: WidgetTitle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<WidgetTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tile_def: Option<TileDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_size: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ToplistDefinition {
    #[serde(flatten)]
    pub title: WidgetTitle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<WidgetTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tile_def: Option<TileDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_size: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChangeDefinition {
    #[serde(flatten)]
    pub title: WidgetTitle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<WidgetTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tile_def: Option<TileDef>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EventTimelineDefinition {
    #[serde(flatten)]
    pub title: WidgetTitle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<WidgetTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EventStreamDefinition {
    #[serde(flatten)]
    pub title: WidgetTitle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<WidgetTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_size: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImageDefinition {
    #[serde(flatten)]
    pub title: WidgetTitle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NoteDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_pos: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_edge: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AlertGraphDefinition {
    #[serde(flatten)]
    pub title: WidgetTitle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<WidgetTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viz_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_refresh: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AlertValueDefinition {
    #[serde(flatten)]
    pub title: WidgetTitle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_refresh: Option<bool>,
    /// Digit count or `"*"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<NumberOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IframeDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CheckStatusDefinition {
    #[serde(flatten)]
    pub title: WidgetTitle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<WidgetTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouping: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// APM service summary. The API spells these keys in camelCase.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TraceServiceDefinition {
    #[serde(flatten)]
    pub title: WidgetTitle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<WidgetTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<String>,
    #[serde(rename = "serviceService", skip_serializing_if = "Option::is_none")]
    pub service_service: Option<String>,
    #[serde(rename = "serviceName", skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(rename = "sizeVersion", skip_serializing_if = "Option::is_none")]
    pub size_version: Option<String>,
    #[serde(rename = "layoutVersion", skip_serializing_if = "Option::is_none")]
    pub layout_version: Option<String>,
    #[serde(rename = "mustShowHits", skip_serializing_if = "Option::is_none")]
    pub must_show_hits: Option<bool>,
    #[serde(rename = "mustShowErrors", skip_serializing_if = "Option::is_none")]
    pub must_show_errors: Option<bool>,
    #[serde(rename = "mustShowLatency", skip_serializing_if = "Option::is_none")]
    pub must_show_latency: Option<bool>,
    #[serde(rename = "mustShowBreakdown", skip_serializing_if = "Option::is_none")]
    pub must_show_breakdown: Option<bool>,
    #[serde(rename = "mustShowDistribution", skip_serializing_if = "Option::is_none")]
    pub must_show_distribution: Option<bool>,
    #[serde(rename = "mustShowResourceList", skip_serializing_if = "Option::is_none")]
    pub must_show_resource_list: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HostmapDefinition {
    #[serde(flatten)]
    pub title: WidgetTitle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tile_def: Option<TileDef>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ManageStatusDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_preference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_zero_counts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_status_show_title: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_status_title_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_status_title_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_status_title_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<ManageStatusParams>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ManageStatusParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LogStreamDefinition {
    #[serde(flatten)]
    pub title: WidgetTitle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<WidgetTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logset: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UptimeDefinition {
    #[serde(flatten)]
    pub title: WidgetTitle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<WidgetTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeframes: Option<Vec<String>>,
    /// Keyed by rule index (`"0"`, `"1"`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<BTreeMap<String, UptimeRule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor: Option<UptimeMonitor>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UptimeRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UptimeMonitor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProcessDefinition {
    #[serde(flatten)]
    pub title: WidgetTitle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<WidgetTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tile_def: Option<TileDef>,
}

/// A container of nested widgets.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GroupDefinition {
    #[serde(flatten)]
    pub title: WidgetTitle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_type: Option<String>,
    #[serde(default)]
    pub widgets: Vec<BoardWidget>,
}

tagged_definitions! {
    /// Discriminator of a board widget (`type` on the wire).
    kind WidgetType;
    /// Concrete payload of a board widget.
    definition WidgetDefinition;
    entity "widget";
    FreeText(FreeTextDefinition) => "free_text",
    Timeseries(TimeseriesDefinition) => "timeseries",
    QueryValue(QueryValueDefinition) => "query_value",
    Toplist(ToplistDefinition) => "toplist",
    Change(ChangeDefinition) => "change",
    EventTimeline(EventTimelineDefinition) => "event_timeline",
    EventStream(EventStreamDefinition) => "event_stream",
    Image(ImageDefinition) => "image",
    Note(NoteDefinition) => "note",
    AlertGraph(AlertGraphDefinition) => "alert_graph",
    AlertValue(AlertValueDefinition) => "alert_value",
    Iframe(IframeDefinition) => "iframe",
    CheckStatus(CheckStatusDefinition) => "check_status",
    TraceService(TraceServiceDefinition) => "trace_service",
    Hostmap(HostmapDefinition) => "hostmap",
    ManageStatus(ManageStatusDefinition) => "manage_status",
    LogStream(LogStreamDefinition) => "log_stream",
    Uptime(UptimeDefinition) => "uptime",
    Process(ProcessDefinition) => "process",
    Group(GroupDefinition) => "group",
}

/// A widget placed on a board.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardWidget {
    pub layout: WidgetLayout,
    pub definition: WidgetDefinition,
}

impl BoardWidget {
    pub fn new(definition: WidgetDefinition) -> Self {
        Self {
            layout: WidgetLayout::default(),
            definition,
        }
    }

    /// Place the widget at the given grid position and size.
    pub fn at(mut self, x: i64, y: i64, width: i64, height: i64) -> Self {
        self.layout = WidgetLayout::new(x, y, width, height);
        self
    }

    pub fn kind(&self) -> WidgetType {
        self.definition.kind()
    }

    /// Nested widgets, for groups; empty for every other variant.
    pub fn children(&self) -> &[BoardWidget] {
        match &self.definition {
            WidgetDefinition::Group(group) => &group.widgets,
            _ => &[],
        }
    }
}

impl Serialize for BoardWidget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let definition = self.definition.to_value().map_err(ser::Error::custom)?;
        let mut extra = match serde_json::to_value(&self.layout).map_err(ser::Error::custom)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        extra.insert(
            DISCRIMINATOR_KEY.to_string(),
            Value::String(self.kind().as_str().to_string()),
        );
        codec::merge_flat(definition, extra)
            .map_err(ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BoardWidget {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut map = Map::<String, Value>::deserialize(deserializer)?;
        let tag = codec::take_discriminator(&mut map, "widget").map_err(de::Error::custom)?;
        let kind: WidgetType = tag.parse().map_err(de::Error::custom)?;
        let layout = WidgetLayout::take_from(&mut map).map_err(de::Error::custom)?;
        let definition =
            WidgetDefinition::from_value(kind, Value::Object(map)).map_err(de::Error::custom)?;
        Ok(Self { layout, definition })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;
    use crate::error::ClientError;
    use serde_json::json;

    const FREE_TEXT: &str = r##"{"type":"free_text","x":1,"y":1,"width":5,"height":5,"text":"Test","text_align":"right","font_size":"36","color":"#ffc0cb"}"##;

    #[test]
    fn test_free_text_decode() {
        let widget: BoardWidget = codec::decode(FREE_TEXT.as_bytes()).unwrap();

        assert_eq!(widget.kind(), WidgetType::FreeText);
        assert_eq!(widget.layout, WidgetLayout::new(1, 1, 5, 5));
        let WidgetDefinition::FreeText(definition) = &widget.definition else {
            panic!("expected free_text, got {:?}", widget.kind());
        };
        assert_eq!(definition.text.as_deref(), Some("Test"));
        assert_eq!(definition.font_size.as_deref(), Some("36"));
        assert_eq!(definition.color.as_deref(), Some("#ffc0cb"));
    }

    #[test]
    fn test_free_text_reencode_preserves_pairs() {
        let widget: BoardWidget = codec::decode(FREE_TEXT.as_bytes()).unwrap();
        let encoded: Value = serde_json::from_slice(&codec::encode(&widget).unwrap()).unwrap();
        let original: Value = serde_json::from_str(FREE_TEXT).unwrap();
        assert_eq!(encoded, original);
    }

    #[test]
    fn test_unknown_type_is_schema_error() {
        let err = codec::decode::<BoardWidget>(br#"{"type":"sparkline","x":0}"#).unwrap_err();
        match err {
            ClientError::Schema(message) => {
                assert!(message.contains("unknown widget type `sparkline`"), "{message}");
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_type_is_schema_error() {
        let err = codec::decode::<BoardWidget>(br#"{"text":"orphan"}"#).unwrap_err();
        assert!(matches!(err, ClientError::Schema(_)));
    }

    #[test]
    fn test_non_object_widget_is_rejected() {
        let err = codec::decode::<BoardWidget>(br#"["free_text"]"#).unwrap_err();
        assert!(matches!(err, ClientError::Schema(_)));
    }

    #[test]
    fn test_widget_type_round_trips_through_strings() {
        for kind in WidgetType::ALL {
            assert_eq!(kind.as_str().parse::<WidgetType>().unwrap(), *kind);
        }
        assert_eq!(WidgetType::ALL.len(), 20);
    }

    #[test]
    fn test_encoded_type_is_top_level() {
        let widget = BoardWidget::new(WidgetDefinition::Iframe(IframeDefinition {
            url: Some("https://status.example.com".to_string()),
        }));
        let value = serde_json::to_value(&widget).unwrap();
        assert_eq!(
            value,
            json!({"type": "iframe", "url": "https://status.example.com"})
        );
    }

    #[test]
    fn test_empty_group_emits_empty_widgets() {
        let widget = BoardWidget::new(WidgetDefinition::Group(GroupDefinition::default()));
        let value = serde_json::to_value(&widget).unwrap();
        assert_eq!(value, json!({"type": "group", "widgets": []}));
    }

    #[test]
    fn test_nested_groups_round_trip() {
        let input = json!({
            "type": "group",
            "title_text": "outer",
            "layout_type": "ordered",
            "widgets": [
                {"type": "note", "x": 0, "y": 0, "html": "first"},
                {
                    "type": "group",
                    "layout_type": "ordered",
                    "widgets": [
                        {"type": "iframe", "url": "https://a"},
                        {"type": "group", "widgets": []}
                    ]
                }
            ]
        });

        let widget: BoardWidget = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(widget.children().len(), 2);
        assert_eq!(widget.children()[0].kind(), WidgetType::Note);
        let inner = &widget.children()[1];
        assert_eq!(inner.kind(), WidgetType::Group);
        assert_eq!(inner.children()[0].kind(), WidgetType::Iframe);
        assert!(inner.children()[1].children().is_empty());

        assert_eq!(serde_json::to_value(&widget).unwrap(), input);
    }

    #[test]
    fn test_nested_unknown_type_fails_whole_decode() {
        let input = json!({
            "type": "group",
            "widgets": [{"type": "mystery"}]
        });
        let err = serde_json::from_value::<BoardWidget>(input).unwrap_err();
        assert!(err.to_string().contains("unknown widget type `mystery`"));
    }

    #[test]
    fn test_absent_layout_keys_are_omitted() {
        let input = json!({"type": "note", "x": 3, "html": "<b>hi</b>", "tick": false});
        let widget: BoardWidget = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(widget.layout.x, Some(3));
        assert_eq!(widget.layout.y, None);
        assert_eq!(serde_json::to_value(&widget).unwrap(), input);
    }

    #[test]
    fn test_alert_value_precision_accepts_number_and_string() {
        let widget: BoardWidget = serde_json::from_value(json!({
            "type": "alert_value",
            "alert_id": "123",
            "precision": 2
        }))
        .unwrap();
        let WidgetDefinition::AlertValue(definition) = &widget.definition else {
            panic!("expected alert_value");
        };
        assert_eq!(definition.precision.as_ref().unwrap().as_str(), "2");

        let value = serde_json::to_value(&widget).unwrap();
        assert_eq!(value["precision"], json!("2"));
    }

    #[test]
    fn test_nested_numbers_keep_their_literal_text() {
        let input = br#"{
            "type": "group",
            "widgets": [
                {"type": "alert_value", "alert_id": "7", "precision": 1.50},
                {"type": "query_value", "tile_def": {
                    "requests": [{"conditional_formats": [{"value": 12345678901234567890123}]}],
                    "style": {"fill_max": 1e3}
                }}
            ]
        }"#;
        let widget: BoardWidget = codec::decode(input).unwrap();

        let WidgetDefinition::AlertValue(alert) = &widget.children()[0].definition else {
            panic!("expected alert_value");
        };
        assert_eq!(alert.precision.as_ref().unwrap().as_str(), "1.50");

        let WidgetDefinition::QueryValue(query) = &widget.children()[1].definition else {
            panic!("expected query_value");
        };
        let tile = query.tile_def.as_ref().unwrap();
        let format = &tile.requests.as_ref().unwrap()[0]
            .conditional_formats
            .as_ref()
            .unwrap()[0];
        assert_eq!(
            format.value.as_ref().unwrap().as_str(),
            "12345678901234567890123"
        );
        let fill_max = tile.style.as_ref().unwrap().fill_max.as_ref().unwrap();
        assert_eq!(fill_max.as_str(), "1e3");

        let encoded = serde_json::to_value(&widget).unwrap();
        assert_eq!(encoded["widgets"][0]["precision"], json!("1.50"));
        assert_eq!(encoded["widgets"][1]["tile_def"]["style"]["fill_max"], json!("1e3"));
    }

    #[test]
    fn test_trace_service_uses_camel_case_keys() {
        let input = json!({
            "type": "trace_service",
            "env": "prod",
            "serviceService": "web",
            "serviceName": "rack.request",
            "sizeVersion": "large",
            "layoutVersion": "three_column",
            "mustShowHits": true,
            "mustShowErrors": false
        });
        let widget: BoardWidget = serde_json::from_value(input.clone()).unwrap();
        let WidgetDefinition::TraceService(definition) = &widget.definition else {
            panic!("expected trace_service");
        };
        assert_eq!(definition.service_name.as_deref(), Some("rack.request"));
        assert_eq!(definition.must_show_errors, Some(false));
        assert_eq!(serde_json::to_value(&widget).unwrap(), input);
    }
}
