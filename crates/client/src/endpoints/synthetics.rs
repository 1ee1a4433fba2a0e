//! Synthetics endpoints (`/v1/synthetics/tests`).

use reqwest::Method;

use crate::endpoints::encode_path_segment;
use crate::endpoints::request::{ApiContext, NO_BODY, send_json};
use crate::error::Result;
use crate::models::SyntheticsTest;
use crate::models::synthetics::{
    DeleteSyntheticsTestsRequest, DeleteSyntheticsTestsResponse, DeletedSyntheticsTest,
    SyntheticsStatusRequest, SyntheticsTestList,
};

const TESTS_PATH: &str = "/v1/synthetics/tests";

fn test_path(public_id: &str) -> String {
    format!("{TESTS_PATH}/{}", encode_path_segment(public_id))
}

pub async fn create_synthetics_test(
    ctx: &ApiContext<'_>,
    test: &SyntheticsTest,
) -> Result<SyntheticsTest> {
    send_json(ctx, Method::POST, TESTS_PATH, &[], Some(test)).await
}

pub async fn get_synthetics_test(ctx: &ApiContext<'_>, public_id: &str) -> Result<SyntheticsTest> {
    send_json(ctx, Method::GET, &test_path(public_id), &[], NO_BODY).await
}

pub async fn update_synthetics_test(
    ctx: &ApiContext<'_>,
    public_id: &str,
    test: &SyntheticsTest,
) -> Result<SyntheticsTest> {
    send_json(ctx, Method::PUT, &test_path(public_id), &[], Some(test)).await
}

pub async fn list_synthetics_tests(ctx: &ApiContext<'_>) -> Result<Vec<SyntheticsTest>> {
    let response: SyntheticsTestList =
        send_json(ctx, Method::GET, TESTS_PATH, &[], NO_BODY).await?;
    Ok(response.tests)
}

/// Delete several tests in one call.
pub async fn delete_synthetics_tests(
    ctx: &ApiContext<'_>,
    public_ids: &[String],
) -> Result<Vec<DeletedSyntheticsTest>> {
    let body = DeleteSyntheticsTestsRequest {
        public_ids: public_ids.to_vec(),
    };
    let path = format!("{TESTS_PATH}/delete");
    let response: DeleteSyntheticsTestsResponse =
        send_json(ctx, Method::POST, &path, &[], Some(&body)).await?;
    Ok(response.deleted_tests)
}

/// Start (`live`) or pause (`paused`) a test.
pub async fn set_synthetics_test_status(
    ctx: &ApiContext<'_>,
    public_id: &str,
    status: &str,
) -> Result<bool> {
    let body = SyntheticsStatusRequest {
        new_status: status.to_string(),
    };
    let path = format!("{}/status", test_path(public_id));
    send_json(ctx, Method::PUT, &path, &[], Some(&body)).await
}
