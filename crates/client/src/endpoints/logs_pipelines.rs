//! Logs pipeline endpoints (`/v1/logs/config`).

use reqwest::Method;
use serde::de::IgnoredAny;

use crate::endpoints::encode_path_segment;
use crate::endpoints::request::{ApiContext, NO_BODY, send_json};
use crate::error::Result;
use crate::models::{LogsPipeline, LogsPipelineOrder};

const PIPELINES_PATH: &str = "/v1/logs/config/pipelines";
const PIPELINE_ORDER_PATH: &str = "/v1/logs/config/pipeline-order";

fn pipeline_path(id: &str) -> String {
    format!("{PIPELINES_PATH}/{}", encode_path_segment(id))
}

pub async fn create_logs_pipeline(
    ctx: &ApiContext<'_>,
    pipeline: &LogsPipeline,
) -> Result<LogsPipeline> {
    send_json(ctx, Method::POST, PIPELINES_PATH, &[], Some(pipeline)).await
}

pub async fn get_logs_pipeline(ctx: &ApiContext<'_>, id: &str) -> Result<LogsPipeline> {
    send_json(ctx, Method::GET, &pipeline_path(id), &[], NO_BODY).await
}

pub async fn update_logs_pipeline(
    ctx: &ApiContext<'_>,
    id: &str,
    pipeline: &LogsPipeline,
) -> Result<LogsPipeline> {
    send_json(ctx, Method::PUT, &pipeline_path(id), &[], Some(pipeline)).await
}

pub async fn delete_logs_pipeline(ctx: &ApiContext<'_>, id: &str) -> Result<()> {
    let _: IgnoredAny = send_json(ctx, Method::DELETE, &pipeline_path(id), &[], NO_BODY).await?;
    Ok(())
}

pub async fn list_logs_pipelines(ctx: &ApiContext<'_>) -> Result<Vec<LogsPipeline>> {
    send_json(ctx, Method::GET, PIPELINES_PATH, &[], NO_BODY).await
}

pub async fn get_logs_pipeline_order(ctx: &ApiContext<'_>) -> Result<LogsPipelineOrder> {
    send_json(ctx, Method::GET, PIPELINE_ORDER_PATH, &[], NO_BODY).await
}

/// Replace the pipeline order. The list must name every existing pipeline.
pub async fn update_logs_pipeline_order(
    ctx: &ApiContext<'_>,
    order: &LogsPipelineOrder,
) -> Result<LogsPipelineOrder> {
    send_json(ctx, Method::PUT, PIPELINE_ORDER_PATH, &[], Some(order)).await
}
