//! Screenboard endpoints (`/v1/screen`).

use reqwest::Method;
use serde::de::IgnoredAny;

use crate::endpoints::request::{ApiContext, NO_BODY, send_json};
use crate::error::Result;
use crate::models::screenboards::ScreenboardListResponse;
use crate::models::{ScreenShareResponse, Screenboard, ScreenboardSummary};

const SCREEN_PATH: &str = "/v1/screen";

pub async fn create_screenboard(ctx: &ApiContext<'_>, board: &Screenboard) -> Result<Screenboard> {
    send_json(ctx, Method::POST, SCREEN_PATH, &[], Some(board)).await
}

pub async fn get_screenboard(ctx: &ApiContext<'_>, id: i64) -> Result<Screenboard> {
    let path = format!("{SCREEN_PATH}/{id}");
    send_json(ctx, Method::GET, &path, &[], NO_BODY).await
}

pub async fn update_screenboard(
    ctx: &ApiContext<'_>,
    id: i64,
    board: &Screenboard,
) -> Result<Screenboard> {
    let path = format!("{SCREEN_PATH}/{id}");
    send_json(ctx, Method::PUT, &path, &[], Some(board)).await
}

pub async fn delete_screenboard(ctx: &ApiContext<'_>, id: i64) -> Result<()> {
    let path = format!("{SCREEN_PATH}/{id}");
    let _: IgnoredAny = send_json(ctx, Method::DELETE, &path, &[], NO_BODY).await?;
    Ok(())
}

pub async fn list_screenboards(ctx: &ApiContext<'_>) -> Result<Vec<ScreenboardSummary>> {
    let response: ScreenboardListResponse =
        send_json(ctx, Method::GET, SCREEN_PATH, &[], NO_BODY).await?;
    Ok(response.screenboards)
}

/// Create a public URL for a screenboard.
pub async fn share_screenboard(ctx: &ApiContext<'_>, id: i64) -> Result<ScreenShareResponse> {
    let path = format!("{SCREEN_PATH}/share/{id}");
    send_json(ctx, Method::POST, &path, &[], NO_BODY).await
}

/// Revoke a screenboard's public URL.
pub async fn revoke_screenboard(ctx: &ApiContext<'_>, id: i64) -> Result<()> {
    let path = format!("{SCREEN_PATH}/share/{id}");
    let _: IgnoredAny = send_json(ctx, Method::DELETE, &path, &[], NO_BODY).await?;
    Ok(())
}
