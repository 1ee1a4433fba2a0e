//! Synthetics test methods for [`DatadogClient`].

use crate::client::DatadogClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::SyntheticsTest;
use crate::models::synthetics::DeletedSyntheticsTest;

impl DatadogClient {
    pub async fn create_synthetics_test(&self, test: &SyntheticsTest) -> Result<SyntheticsTest> {
        endpoints::create_synthetics_test(&self.context(), test).await
    }

    pub async fn get_synthetics_test(&self, public_id: &str) -> Result<SyntheticsTest> {
        endpoints::get_synthetics_test(&self.context(), public_id).await
    }

    pub async fn update_synthetics_test(
        &self,
        public_id: &str,
        test: &SyntheticsTest,
    ) -> Result<SyntheticsTest> {
        endpoints::update_synthetics_test(&self.context(), public_id, test).await
    }

    pub async fn list_synthetics_tests(&self) -> Result<Vec<SyntheticsTest>> {
        endpoints::list_synthetics_tests(&self.context()).await
    }

    pub async fn delete_synthetics_tests(
        &self,
        public_ids: &[String],
    ) -> Result<Vec<DeletedSyntheticsTest>> {
        endpoints::delete_synthetics_tests(&self.context(), public_ids).await
    }

    /// Set a test to `live` or `paused`. Returns whether the API applied it.
    pub async fn set_synthetics_test_status(&self, public_id: &str, status: &str) -> Result<bool> {
        endpoints::set_synthetics_test_status(&self.context(), public_id, status).await
    }
}
