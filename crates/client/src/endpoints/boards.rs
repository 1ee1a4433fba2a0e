//! Board endpoints (`/v1/dashboard`).

use reqwest::Method;
use serde::de::IgnoredAny;

use crate::endpoints::encode_path_segment;
use crate::endpoints::request::{ApiContext, NO_BODY, send_json};
use crate::error::Result;
use crate::models::{Board, BoardListResponse, BoardSummary};

const BOARDS_PATH: &str = "/v1/dashboard";

fn board_path(id: &str) -> String {
    format!("{BOARDS_PATH}/{}", encode_path_segment(id))
}

/// Create a board and return it as stored, including its new `id`.
pub async fn create_board(ctx: &ApiContext<'_>, board: &Board) -> Result<Board> {
    send_json(ctx, Method::POST, BOARDS_PATH, &[], Some(board)).await
}

pub async fn get_board(ctx: &ApiContext<'_>, id: &str) -> Result<Board> {
    send_json(ctx, Method::GET, &board_path(id), &[], NO_BODY).await
}

/// Replace a board's definition.
pub async fn update_board(ctx: &ApiContext<'_>, id: &str, board: &Board) -> Result<Board> {
    send_json(ctx, Method::PUT, &board_path(id), &[], Some(board)).await
}

pub async fn delete_board(ctx: &ApiContext<'_>, id: &str) -> Result<()> {
    let _: IgnoredAny = send_json(ctx, Method::DELETE, &board_path(id), &[], NO_BODY).await?;
    Ok(())
}

/// List all boards (summaries without widgets).
pub async fn list_boards(ctx: &ApiContext<'_>) -> Result<Vec<BoardSummary>> {
    let response: BoardListResponse =
        send_json(ctx, Method::GET, BOARDS_PATH, &[], NO_BODY).await?;
    Ok(response.dashboards)
}
