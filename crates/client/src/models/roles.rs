//! Role and permission models for the `/v2/roles` and `/v2/permissions` APIs.
//!
//! These endpoints use JSON:API documents: every resource is
//! `{"id", "type", "attributes", "relationships"}` inside a `data` member.

use serde::{Deserialize, Serialize};

pub const ROLES_TYPE: &str = "roles";
pub const PERMISSIONS_TYPE: &str = "permissions";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Role {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub attributes: RoleAttributes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<RoleRelationships>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleRelationships {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<RelationshipList>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationshipList {
    #[serde(default)]
    pub data: Vec<ResourceRef>,
}

/// A `{"id", "type"}` pointer to another resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ResourceRef {
    pub fn permission(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: PERMISSIONS_TYPE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub attributes: PermissionAttributes,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermissionAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restricted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoleListResponse {
    #[serde(default)]
    pub data: Vec<Role>,
    #[serde(default)]
    pub meta: Option<ListMeta>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMeta {
    #[serde(default)]
    pub page: Option<PageMeta>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub total_count: Option<i64>,
    #[serde(default)]
    pub total_filtered_count: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoleResponse {
    #[serde(default)]
    pub data: Option<Role>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PermissionListResponse {
    #[serde(default)]
    pub data: Vec<Permission>,
}

/// Body for creating a role: `{"data": {"type": "roles", "attributes": {...}}}`.
#[derive(Debug, Clone, Serialize)]
pub struct RoleCreateRequest {
    pub data: RoleCreateData,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleCreateData {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub attributes: RoleAttributes,
}

impl RoleCreateRequest {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            data: RoleCreateData {
                kind: ROLES_TYPE,
                attributes: RoleAttributes {
                    name: Some(name.into()),
                    ..RoleAttributes::default()
                },
            },
        }
    }
}

/// Body for granting or revoking one permission.
#[derive(Debug, Clone, Serialize)]
pub struct RelationshipRequest {
    pub data: ResourceRef,
}
