//! Host methods for [`DatadogClient`].

use crate::client::DatadogClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{HostMuteResponse, HostMuteSettings, HostTotals};

impl DatadogClient {
    pub async fn mute_host(
        &self,
        host: &str,
        settings: &HostMuteSettings,
    ) -> Result<HostMuteResponse> {
        endpoints::mute_host(&self.context(), host, settings).await
    }

    pub async fn unmute_host(&self, host: &str) -> Result<HostMuteResponse> {
        endpoints::unmute_host(&self.context(), host).await
    }

    pub async fn get_host_totals(&self) -> Result<HostTotals> {
        endpoints::get_host_totals(&self.context()).await
    }
}
