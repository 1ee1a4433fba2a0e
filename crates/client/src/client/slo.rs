//! Service level objective methods for [`DatadogClient`].

use crate::client::DatadogClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::ServiceLevelObjective;
use crate::models::slo::SloDeleteResponse;

impl DatadogClient {
    pub async fn create_slo(
        &self,
        slo: &ServiceLevelObjective,
    ) -> Result<Vec<ServiceLevelObjective>> {
        endpoints::create_slo(&self.context(), slo).await
    }

    pub async fn get_slo(&self, id: &str) -> Result<ServiceLevelObjective> {
        endpoints::get_slo(&self.context(), id).await
    }

    pub async fn update_slo(
        &self,
        id: &str,
        slo: &ServiceLevelObjective,
    ) -> Result<Vec<ServiceLevelObjective>> {
        endpoints::update_slo(&self.context(), id, slo).await
    }

    pub async fn delete_slo(&self, id: &str) -> Result<SloDeleteResponse> {
        endpoints::delete_slo(&self.context(), id).await
    }

    /// List SLOs; an empty `ids` slice lists all of them.
    pub async fn list_slos(&self, ids: &[String]) -> Result<Vec<ServiceLevelObjective>> {
        endpoints::list_slos(&self.context(), ids).await
    }
}
