//! Role syncer
//!
//! Roles carry one `member` assignment entitlement. AvaTax has no role
//! membership endpoint, so grants are derived by scanning every user for a
//! `securityRoleId` equal to the role's description.

use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::avalara::{AvalaraClient, PaginatedResponse, PaginationOptions, SecurityRoleModel};
use crate::config::api;
use crate::error::{ConnectorError, Result};

use super::resource::{Entitlement, Grant, Profile, Resource, ResourceId, ResourceType, RoleTrait};
use super::resource_types;
use super::syncer::{Page, ResourceSyncer};

/// Slug of the role membership entitlement
pub const ROLE_MEMBER_ENTITLEMENT: &str = "member";

/// Lists AvaTax security roles and derives their memberships
pub struct RoleSyncer {
    client: Arc<AvalaraClient>,
}

impl RoleSyncer {
    pub fn new(client: Arc<AvalaraClient>) -> Self {
        Self { client }
    }
}

/// Map an upstream security role to a role resource
pub fn role_resource(role: &SecurityRoleModel, parent: Option<&ResourceId>) -> Result<Resource> {
    let mut profile = Profile::new();
    profile.insert("id".to_string(), role.id.to_string().into());
    profile.insert("description".to_string(), role.description.clone().into());

    Resource::role(
        role.description.clone(),
        &resource_types::ROLE,
        role.id.to_string(),
        RoleTrait { profile },
        parent,
    )
}

#[async_trait]
impl ResourceSyncer for RoleSyncer {
    fn resource_type(&self) -> &'static ResourceType {
        &resource_types::ROLE
    }

    async fn list(&self, parent: Option<&ResourceId>, token: &str) -> Result<Page<Resource>> {
        let options = PaginationOptions::resume(api::DEFAULT_PAGE_SIZE, token);

        let (response, next) = self
            .client
            .get_user_roles(Some(&options))
            .await
            .map_err(|e| e.context("failed to list roles"))?;

        let resources = response
            .into_items()
            .iter()
            .map(|role| role_resource(role, parent))
            .collect::<Result<Vec<_>>>()
            .map_err(|e| e.context("failed to create role resource"))?;

        let next_token = next.and_then(|o| o.next_link).unwrap_or_default();
        Ok(Page::new(resources, next_token))
    }

    async fn entitlements(&self, resource: &Resource, _token: &str) -> Result<Page<Entitlement>> {
        let entitlement = Entitlement::assignment(resource, ROLE_MEMBER_ENTITLEMENT)
            .with_grantable_to(&resource_types::USER)
            .with_display_name(format!("{} Role", resource.display_name))
            .with_description(format!(
                "Avalara {} role assignment",
                resource.display_name
            ));

        Ok(Page::last(vec![entitlement]))
    }

    /// One page of grants, scanning one page of users
    async fn grants(&self, resource: &Resource, token: &str) -> Result<Page<Grant>> {
        let role_trait = resource
            .role_trait()
            .map_err(|e| e.context("failed to get role trait"))?;
        let role_name = role_trait
            .profile
            .get("description")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                ConnectorError::Config(format!(
                    "failed to get role description from profile of {}",
                    resource.id
                ))
            })?;

        let options = PaginationOptions::resume(api::DEFAULT_PAGE_SIZE, token);
        let (response, next) = self
            .client
            .get_users(Some(&options))
            .await
            .map_err(|e| e.context("failed to list users"))?;

        let grants: Vec<Grant> = response
            .into_items()
            .into_iter()
            .filter(|user| user.security_role_id == role_name)
            .map(|user| {
                Grant::new(
                    resource,
                    ROLE_MEMBER_ENTITLEMENT,
                    ResourceId::new(&resource_types::USER, user.id.to_string()),
                )
            })
            .collect();

        debug!("{} grants for role '{}' on this page", grants.len(), role_name);

        let next_token = next.and_then(|o| o.next_link).unwrap_or_default();
        Ok(Page::new(grants, next_token))
    }
}
