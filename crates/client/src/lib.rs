//! Datadog REST API client.
//!
//! This crate provides a typed client for the Datadog monitoring API:
//! boards and their widgets, monitors, downtimes, hosts, logs pipelines and
//! processors, synthetics tests, SLOs, and roles. Requests authenticate with
//! an API key and an application key and are retried with backoff on
//! throttling and transient server errors.

mod auth;
pub mod client;
pub mod codec;
pub mod endpoints;
pub mod error;
pub mod metrics;
pub mod models;
pub mod rate_limit;
pub mod serde_helpers;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::Credentials;
pub use client::DatadogClient;
pub use client::builder::DatadogClientBuilder;
pub use endpoints::RetryPolicy;
pub use error::{ClientError, Result};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use models::{
    Board, BoardSummary, BoardWidget, Downtime, HostMuteSettings, HostTotals, ListMonitorsParams,
    LogsPipeline, LogsPipelineOrder, LogsProcessor, Monitor, MuteMonitorRequest, Permission,
    ProcessorDefinition, ProcessorType, Role, Screenboard, ServiceLevelObjective, SyntheticsTest,
    WidgetDefinition, WidgetLayout, WidgetType,
};
pub use rate_limit::RateLimit;
pub use serde_helpers::{BoolOrString, NumberOrString};
