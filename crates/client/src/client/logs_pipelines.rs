//! Logs pipeline methods for [`DatadogClient`].
//!
//! Pipelines carry their processors inline; see
//! [`crate::models::LogsProcessor`] for the processor encoding.

use crate::client::DatadogClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{LogsPipeline, LogsPipelineOrder};

impl DatadogClient {
    pub async fn create_logs_pipeline(&self, pipeline: &LogsPipeline) -> Result<LogsPipeline> {
        endpoints::create_logs_pipeline(&self.context(), pipeline).await
    }

    pub async fn get_logs_pipeline(&self, id: &str) -> Result<LogsPipeline> {
        endpoints::get_logs_pipeline(&self.context(), id).await
    }

    pub async fn update_logs_pipeline(
        &self,
        id: &str,
        pipeline: &LogsPipeline,
    ) -> Result<LogsPipeline> {
        endpoints::update_logs_pipeline(&self.context(), id, pipeline).await
    }

    pub async fn delete_logs_pipeline(&self, id: &str) -> Result<()> {
        endpoints::delete_logs_pipeline(&self.context(), id).await
    }

    pub async fn list_logs_pipelines(&self) -> Result<Vec<LogsPipeline>> {
        endpoints::list_logs_pipelines(&self.context()).await
    }

    /// The order in which pipelines are applied to incoming logs.
    pub async fn get_logs_pipeline_order(&self) -> Result<LogsPipelineOrder> {
        endpoints::get_logs_pipeline_order(&self.context()).await
    }

    pub async fn update_logs_pipeline_order(
        &self,
        order: &LogsPipelineOrder,
    ) -> Result<LogsPipelineOrder> {
        endpoints::update_logs_pipeline_order(&self.context(), order).await
    }
}
