//! Monitor methods for [`DatadogClient`].
//!
//! # What this module handles:
//! - Monitor CRUD and filtered listing
//! - Muting and unmuting single monitors or all of them

use crate::client::DatadogClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Downtime, ListMonitorsParams, Monitor, MuteMonitorRequest};

impl DatadogClient {
    pub async fn create_monitor(&self, monitor: &Monitor) -> Result<Monitor> {
        endpoints::create_monitor(&self.context(), monitor).await
    }

    pub async fn get_monitor(&self, id: i64) -> Result<Monitor> {
        endpoints::get_monitor(&self.context(), id).await
    }

    pub async fn update_monitor(&self, id: i64, monitor: &Monitor) -> Result<Monitor> {
        endpoints::update_monitor(&self.context(), id, monitor).await
    }

    pub async fn delete_monitor(&self, id: i64) -> Result<()> {
        endpoints::delete_monitor(&self.context(), id).await
    }

    /// List monitors matching `params`. Default params list every monitor.
    pub async fn list_monitors(&self, params: &ListMonitorsParams) -> Result<Vec<Monitor>> {
        endpoints::list_monitors(&self.context(), params).await
    }

    pub async fn mute_monitor(&self, id: i64, request: &MuteMonitorRequest) -> Result<Monitor> {
        endpoints::mute_monitor(&self.context(), id, request).await
    }

    pub async fn unmute_monitor(&self, id: i64) -> Result<Monitor> {
        endpoints::unmute_monitor(&self.context(), id).await
    }

    pub async fn mute_all_monitors(&self) -> Result<Downtime> {
        endpoints::mute_all_monitors(&self.context()).await
    }

    pub async fn unmute_all_monitors(&self) -> Result<()> {
        endpoints::unmute_all_monitors(&self.context()).await
    }
}
