//! Data models for Datadog API requests and responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod boards;
pub mod common;
pub mod downtimes;
pub mod hosts;
pub mod logs_pipelines;
pub mod logs_processors;
pub mod monitors;
pub mod roles;
pub mod screenboards;
pub mod slo;
pub mod synthetics;
pub mod tile_def;
pub mod widgets;

pub use boards::{Board, BoardListResponse, BoardSummary, TemplateVariable};
pub use common::{ApiErrors, FilterQuery, Presence, wrap};
pub use downtimes::{Downtime, Recurrence};
pub use hosts::{HostMuteResponse, HostMuteSettings, HostTotals};
pub use logs_pipelines::{LogsPipeline, LogsPipelineOrder};
pub use logs_processors::{
    ArithmeticProcessor, AttributeRemapper, Category, CategoryProcessor, GrokParser, GrokRule,
    LogsProcessor, NestedPipeline, ProcessorDefinition, ProcessorType, SourceRemapper, UrlParser,
    UserAgentParser,
};
pub use monitors::{ListMonitorsParams, Monitor, MonitorOptions, MuteMonitorRequest, ThresholdCount};
pub use roles::{Permission, PermissionAttributes, ResourceRef, Role, RoleAttributes};
pub use screenboards::{Screenboard, ScreenboardSummary, ScreenShareResponse};
pub use slo::{ServiceLevelObjective, SloQuery, SloThreshold};
pub use synthetics::{
    SyntheticsAssertion, SyntheticsConfig, SyntheticsOptions, SyntheticsRequest, SyntheticsTest,
};
pub use tile_def::{
    ConditionalFormat, TileDef, TileDefEvent, TileDefMarker, TileDefRequest, TileDefRequestStyle,
    TileDefStyle,
};
pub use widgets::{
    BoardWidget, GroupDefinition, WidgetDefinition, WidgetLayout, WidgetTime, WidgetTitle,
    WidgetType,
};
