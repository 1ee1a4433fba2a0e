//! Downtime endpoints (`/v1/downtime`).

use reqwest::Method;
use serde::de::IgnoredAny;

use crate::endpoints::request::{ApiContext, NO_BODY, send_json};
use crate::error::Result;
use crate::models::Downtime;

const DOWNTIME_PATH: &str = "/v1/downtime";

pub async fn create_downtime(ctx: &ApiContext<'_>, downtime: &Downtime) -> Result<Downtime> {
    send_json(ctx, Method::POST, DOWNTIME_PATH, &[], Some(downtime)).await
}

pub async fn get_downtime(ctx: &ApiContext<'_>, id: i64) -> Result<Downtime> {
    let path = format!("{DOWNTIME_PATH}/{id}");
    send_json(ctx, Method::GET, &path, &[], NO_BODY).await
}

pub async fn update_downtime(
    ctx: &ApiContext<'_>,
    id: i64,
    downtime: &Downtime,
) -> Result<Downtime> {
    let path = format!("{DOWNTIME_PATH}/{id}");
    send_json(ctx, Method::PUT, &path, &[], Some(downtime)).await
}

/// Cancel a downtime.
pub async fn delete_downtime(ctx: &ApiContext<'_>, id: i64) -> Result<()> {
    let path = format!("{DOWNTIME_PATH}/{id}");
    let _: IgnoredAny = send_json(ctx, Method::DELETE, &path, &[], NO_BODY).await?;
    Ok(())
}

pub async fn list_downtimes(ctx: &ApiContext<'_>) -> Result<Vec<Downtime>> {
    send_json(ctx, Method::GET, DOWNTIME_PATH, &[], NO_BODY).await
}
