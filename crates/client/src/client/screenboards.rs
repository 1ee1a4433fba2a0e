//! Legacy screenboard methods for [`DatadogClient`].

use crate::client::DatadogClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{ScreenShareResponse, Screenboard, ScreenboardSummary};

impl DatadogClient {
    pub async fn create_screenboard(&self, board: &Screenboard) -> Result<Screenboard> {
        endpoints::create_screenboard(&self.context(), board).await
    }

    pub async fn get_screenboard(&self, id: i64) -> Result<Screenboard> {
        endpoints::get_screenboard(&self.context(), id).await
    }

    pub async fn update_screenboard(&self, id: i64, board: &Screenboard) -> Result<Screenboard> {
        endpoints::update_screenboard(&self.context(), id, board).await
    }

    pub async fn delete_screenboard(&self, id: i64) -> Result<()> {
        endpoints::delete_screenboard(&self.context(), id).await
    }

    pub async fn list_screenboards(&self) -> Result<Vec<ScreenboardSummary>> {
        endpoints::list_screenboards(&self.context()).await
    }

    /// Make a screenboard publicly viewable and return its public URL.
    pub async fn share_screenboard(&self, id: i64) -> Result<ScreenShareResponse> {
        endpoints::share_screenboard(&self.context(), id).await
    }

    pub async fn revoke_screenboard(&self, id: i64) -> Result<()> {
        endpoints::revoke_screenboard(&self.context(), id).await
    }
}
