//! Host endpoints (`/v1/host`, `/v1/hosts`).

use reqwest::Method;

use crate::endpoints::encode_path_segment;
use crate::endpoints::request::{ApiContext, NO_BODY, send_json};
use crate::error::Result;
use crate::models::{HostMuteResponse, HostMuteSettings, HostTotals};

pub async fn mute_host(
    ctx: &ApiContext<'_>,
    host: &str,
    settings: &HostMuteSettings,
) -> Result<HostMuteResponse> {
    let path = format!("/v1/host/{}/mute", encode_path_segment(host));
    send_json(ctx, Method::POST, &path, &[], Some(settings)).await
}

pub async fn unmute_host(ctx: &ApiContext<'_>, host: &str) -> Result<HostMuteResponse> {
    let path = format!("/v1/host/{}/unmute", encode_path_segment(host));
    send_json(ctx, Method::POST, &path, &[], NO_BODY).await
}

/// Number of hosts reporting and active in the last hours.
pub async fn get_host_totals(ctx: &ApiContext<'_>) -> Result<HostTotals> {
    send_json(ctx, Method::GET, "/v1/hosts/totals", &[], NO_BODY).await
}
