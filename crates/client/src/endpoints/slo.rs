//! Service level objective endpoints (`/v1/slo`).

use reqwest::Method;

use crate::endpoints::encode_path_segment;
use crate::endpoints::request::{ApiContext, NO_BODY, require_data, send_json};
use crate::error::Result;
use crate::models::ServiceLevelObjective;
use crate::models::slo::{SloDeleteResponse, SloListResponse, SloResponse};

const SLO_PATH: &str = "/v1/slo";

fn slo_path(id: &str) -> String {
    format!("{SLO_PATH}/{}", encode_path_segment(id))
}

/// Create an SLO; the API answers with a one-element list.
pub async fn create_slo(
    ctx: &ApiContext<'_>,
    slo: &ServiceLevelObjective,
) -> Result<Vec<ServiceLevelObjective>> {
    let response: SloListResponse = send_json(ctx, Method::POST, SLO_PATH, &[], Some(slo)).await?;
    Ok(response.data)
}

pub async fn get_slo(ctx: &ApiContext<'_>, id: &str) -> Result<ServiceLevelObjective> {
    let response: SloResponse = send_json(ctx, Method::GET, &slo_path(id), &[], NO_BODY).await?;
    require_data(response.data, "SLO")
}

pub async fn update_slo(
    ctx: &ApiContext<'_>,
    id: &str,
    slo: &ServiceLevelObjective,
) -> Result<Vec<ServiceLevelObjective>> {
    let response: SloListResponse =
        send_json(ctx, Method::PUT, &slo_path(id), &[], Some(slo)).await?;
    Ok(response.data)
}

/// Delete an SLO. Ids that could not be removed are reported in `errors`.
pub async fn delete_slo(ctx: &ApiContext<'_>, id: &str) -> Result<SloDeleteResponse> {
    send_json(ctx, Method::DELETE, &slo_path(id), &[], NO_BODY).await
}

/// List SLOs, restricted to `ids` when non-empty.
pub async fn list_slos(
    ctx: &ApiContext<'_>,
    ids: &[String],
) -> Result<Vec<ServiceLevelObjective>> {
    let mut query: Vec<(&str, String)> = Vec::new();
    if !ids.is_empty() {
        query.push(("ids", ids.join(",")));
    }
    let response: SloListResponse = send_json(ctx, Method::GET, SLO_PATH, &query, NO_BODY).await?;
    Ok(response.data)
}
