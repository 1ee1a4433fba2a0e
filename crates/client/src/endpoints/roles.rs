//! Role and permission endpoints (`/v2/roles`, `/v2/permissions`).

use reqwest::Method;
use serde::de::IgnoredAny;

use crate::endpoints::encode_path_segment;
use crate::endpoints::request::{ApiContext, NO_BODY, require_data, send_json};
use crate::error::Result;
use crate::models::roles::{
    PermissionListResponse, RelationshipRequest, RoleCreateRequest, RoleListResponse,
    RoleResponse,
};
use crate::models::{Permission, ResourceRef, Role};

const ROLES_PATH: &str = "/v2/roles";

fn role_path(id: &str) -> String {
    format!("{ROLES_PATH}/{}", encode_path_segment(id))
}

pub async fn list_roles(ctx: &ApiContext<'_>) -> Result<Vec<Role>> {
    let response: RoleListResponse = send_json(ctx, Method::GET, ROLES_PATH, &[], NO_BODY).await?;
    Ok(response.data)
}

pub async fn get_role(ctx: &ApiContext<'_>, id: &str) -> Result<Role> {
    let response: RoleResponse = send_json(ctx, Method::GET, &role_path(id), &[], NO_BODY).await?;
    require_data(response.data, "role")
}

pub async fn create_role(ctx: &ApiContext<'_>, name: &str) -> Result<Role> {
    let body = RoleCreateRequest::named(name);
    let response: RoleResponse = send_json(ctx, Method::POST, ROLES_PATH, &[], Some(&body)).await?;
    require_data(response.data, "role")
}

pub async fn delete_role(ctx: &ApiContext<'_>, id: &str) -> Result<()> {
    let _: IgnoredAny = send_json(ctx, Method::DELETE, &role_path(id), &[], NO_BODY).await?;
    Ok(())
}

/// Every permission defined in the organization.
pub async fn list_permissions(ctx: &ApiContext<'_>) -> Result<Vec<Permission>> {
    let response: PermissionListResponse =
        send_json(ctx, Method::GET, "/v2/permissions", &[], NO_BODY).await?;
    Ok(response.data)
}

pub async fn list_role_permissions(ctx: &ApiContext<'_>, role_id: &str) -> Result<Vec<Permission>> {
    let path = format!("{}/permissions", role_path(role_id));
    let response: PermissionListResponse =
        send_json(ctx, Method::GET, &path, &[], NO_BODY).await?;
    Ok(response.data)
}

/// Grant a permission; returns the role's permissions afterwards.
pub async fn grant_permission(
    ctx: &ApiContext<'_>,
    role_id: &str,
    permission_id: &str,
) -> Result<Vec<Permission>> {
    let path = format!("{}/permissions", role_path(role_id));
    let body = RelationshipRequest {
        data: ResourceRef::permission(permission_id),
    };
    let response: PermissionListResponse =
        send_json(ctx, Method::POST, &path, &[], Some(&body)).await?;
    Ok(response.data)
}

/// Revoke a permission; returns the role's permissions afterwards.
pub async fn revoke_permission(
    ctx: &ApiContext<'_>,
    role_id: &str,
    permission_id: &str,
) -> Result<Vec<Permission>> {
    let path = format!("{}/permissions", role_path(role_id));
    let body = RelationshipRequest {
        data: ResourceRef::permission(permission_id),
    };
    let response: PermissionListResponse =
        send_json(ctx, Method::DELETE, &path, &[], Some(&body)).await?;
    Ok(response.data)
}
