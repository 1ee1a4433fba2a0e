//! Downtime methods for [`DatadogClient`].

use crate::client::DatadogClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Downtime;

impl DatadogClient {
    /// Schedule a downtime.
    pub async fn create_downtime(&self, downtime: &Downtime) -> Result<Downtime> {
        endpoints::create_downtime(&self.context(), downtime).await
    }

    pub async fn get_downtime(&self, id: i64) -> Result<Downtime> {
        endpoints::get_downtime(&self.context(), id).await
    }

    pub async fn update_downtime(&self, id: i64, downtime: &Downtime) -> Result<Downtime> {
        endpoints::update_downtime(&self.context(), id, downtime).await
    }

    pub async fn delete_downtime(&self, id: i64) -> Result<()> {
        endpoints::delete_downtime(&self.context(), id).await
    }

    pub async fn list_downtimes(&self) -> Result<Vec<Downtime>> {
        endpoints::list_downtimes(&self.context()).await
    }
}
