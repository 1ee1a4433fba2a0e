//! Monitor endpoints (`/v1/monitor`).

use reqwest::Method;
use serde::de::IgnoredAny;

use crate::endpoints::request::{ApiContext, NO_BODY, send_json};
use crate::error::Result;
use crate::models::{Downtime, ListMonitorsParams, Monitor, MuteMonitorRequest};

const MONITOR_PATH: &str = "/v1/monitor";

pub async fn create_monitor(ctx: &ApiContext<'_>, monitor: &Monitor) -> Result<Monitor> {
    send_json(ctx, Method::POST, MONITOR_PATH, &[], Some(monitor)).await
}

pub async fn get_monitor(ctx: &ApiContext<'_>, id: i64) -> Result<Monitor> {
    let path = format!("{MONITOR_PATH}/{id}");
    send_json(ctx, Method::GET, &path, &[], NO_BODY).await
}

pub async fn update_monitor(ctx: &ApiContext<'_>, id: i64, monitor: &Monitor) -> Result<Monitor> {
    let path = format!("{MONITOR_PATH}/{id}");
    send_json(ctx, Method::PUT, &path, &[], Some(monitor)).await
}

pub async fn delete_monitor(ctx: &ApiContext<'_>, id: i64) -> Result<()> {
    let path = format!("{MONITOR_PATH}/{id}");
    let _: IgnoredAny = send_json(ctx, Method::DELETE, &path, &[], NO_BODY).await?;
    Ok(())
}

/// List monitors, optionally filtered by name and monitor tags.
pub async fn list_monitors(
    ctx: &ApiContext<'_>,
    params: &ListMonitorsParams,
) -> Result<Vec<Monitor>> {
    let mut query: Vec<(&str, String)> = Vec::new();
    if let Some(name) = &params.name {
        query.push(("name", name.clone()));
    }
    if !params.tags.is_empty() {
        query.push(("monitor_tags", params.tags.join(",")));
    }
    send_json(ctx, Method::GET, MONITOR_PATH, &query, NO_BODY).await
}

/// Silence a monitor, optionally for one scope and until a given time.
pub async fn mute_monitor(
    ctx: &ApiContext<'_>,
    id: i64,
    request: &MuteMonitorRequest,
) -> Result<Monitor> {
    let path = format!("{MONITOR_PATH}/{id}/mute");
    send_json(ctx, Method::POST, &path, &[], Some(request)).await
}

pub async fn unmute_monitor(ctx: &ApiContext<'_>, id: i64) -> Result<Monitor> {
    let path = format!("{MONITOR_PATH}/{id}/unmute");
    send_json(ctx, Method::POST, &path, &[], NO_BODY).await
}

/// Mute every monitor; the API answers with the downtime it created.
pub async fn mute_all_monitors(ctx: &ApiContext<'_>) -> Result<Downtime> {
    let path = format!("{MONITOR_PATH}/mute_all");
    send_json(ctx, Method::POST, &path, &[], NO_BODY).await
}

pub async fn unmute_all_monitors(ctx: &ApiContext<'_>) -> Result<()> {
    let path = format!("{MONITOR_PATH}/unmute_all");
    let _: IgnoredAny = send_json(ctx, Method::POST, &path, &[], NO_BODY).await?;
    Ok(())
}
