//! Board methods for [`DatadogClient`].

use crate::client::DatadogClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Board, BoardSummary};

impl DatadogClient {
    /// Create a board. The returned board carries its assigned `id`.
    pub async fn create_board(&self, board: &Board) -> Result<Board> {
        endpoints::create_board(&self.context(), board).await
    }

    /// Fetch a board with all of its widgets.
    pub async fn get_board(&self, id: &str) -> Result<Board> {
        endpoints::get_board(&self.context(), id).await
    }

    pub async fn update_board(&self, id: &str, board: &Board) -> Result<Board> {
        endpoints::update_board(&self.context(), id, board).await
    }

    pub async fn delete_board(&self, id: &str) -> Result<()> {
        endpoints::delete_board(&self.context(), id).await
    }

    pub async fn list_boards(&self) -> Result<Vec<BoardSummary>> {
        endpoints::list_boards(&self.context()).await
    }
}
