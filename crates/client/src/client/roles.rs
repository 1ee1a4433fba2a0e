//! Role management methods for [`DatadogClient`].
//!
//! # What this module handles:
//! - Listing, fetching, creating and deleting roles
//! - Listing permissions and granting or revoking them on a role

use crate::client::DatadogClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Permission, Role};

impl DatadogClient {
    pub async fn list_roles(&self) -> Result<Vec<Role>> {
        endpoints::list_roles(&self.context()).await
    }

    pub async fn get_role(&self, id: &str) -> Result<Role> {
        endpoints::get_role(&self.context(), id).await
    }

    /// Create an empty role with the given name.
    pub async fn create_role(&self, name: &str) -> Result<Role> {
        endpoints::create_role(&self.context(), name).await
    }

    pub async fn delete_role(&self, id: &str) -> Result<()> {
        endpoints::delete_role(&self.context(), id).await
    }

    pub async fn list_permissions(&self) -> Result<Vec<Permission>> {
        endpoints::list_permissions(&self.context()).await
    }

    pub async fn list_role_permissions(&self, role_id: &str) -> Result<Vec<Permission>> {
        endpoints::list_role_permissions(&self.context(), role_id).await
    }

    pub async fn grant_permission(
        &self,
        role_id: &str,
        permission_id: &str,
    ) -> Result<Vec<Permission>> {
        endpoints::grant_permission(&self.context(), role_id, permission_id).await
    }

    pub async fn revoke_permission(
        &self,
        role_id: &str,
        permission_id: &str,
    ) -> Result<Vec<Permission>> {
        endpoints::revoke_permission(&self.context(), role_id, permission_id).await
    }
}
