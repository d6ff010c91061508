//! Connector facade exposed to the host governance platform
//!
//! [`Avalara`] owns the AvaTax client and hands out one [`ResourceSyncer`]
//! per synced resource type. The host drives paging through the syncers.

mod commands;
pub mod resource;
pub mod resource_types;
mod roles;
mod sync;
mod syncer;
mod users;

use log::{debug, info};
use std::sync::Arc;

use crate::avalara::{AvalaraClient, ConnectorConfig};
use crate::error::{ConnectorError, Result};

pub use commands::{run_metadata_command, run_sync_command, run_validate_command};
pub use resource::{
    Asset, AssetRef, ConnectorMetadata, Email, Entitlement, EntitlementPurpose, Grant, Profile,
    Resource, ResourceId, ResourceType, RoleTrait, TraitKind, Traits, UserStatus, UserTrait,
};
pub use roles::{role_resource, RoleSyncer, ROLE_MEMBER_ENTITLEMENT};
pub use sync::{sync_all, SyncProgress, SyncReport};
pub use syncer::{Page, PageToken, ResourceSyncer};
pub use users::{user_resource, UserSyncer};

const DISPLAY_NAME: &str = "Avalara";
const DESCRIPTION: &str =
    "The Avalara connector allows you to sync users, roles, and entitlements from your Avalara account.";

/// Avalara identity connector
pub struct Avalara {
    client: Arc<AvalaraClient>,
}

impl Avalara {
    pub fn new(client: AvalaraClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Validate `config` and build a connector with a fresh client
    pub fn connect(config: &ConnectorConfig) -> Result<Self> {
        config.validate()?;
        let client = AvalaraClient::connect(
            &config.environment_selector(),
            &config.username,
            &config.password,
        );
        Ok(Self::new(client))
    }

    pub fn client(&self) -> &AvalaraClient {
        &self.client
    }

    /// User and role syncers, in that order
    pub fn resource_syncers(&self) -> Vec<Box<dyn ResourceSyncer>> {
        vec![
            Box::new(UserSyncer::new(Arc::clone(&self.client))),
            Box::new(RoleSyncer::new(Arc::clone(&self.client))),
        ]
    }

    pub fn metadata(&self) -> ConnectorMetadata {
        ConnectorMetadata {
            display_name: DISPLAY_NAME.to_string(),
            description: DESCRIPTION.to_string(),
        }
    }

    /// Ping AvaTax and require an authenticated session
    pub async fn validate(&self) -> Result<()> {
        let ping = self
            .client
            .ping()
            .await
            .map_err(|e| e.context("failed to validate Avalara connection"))?;

        if !ping.authenticated {
            return Err(ConnectorError::Config(
                "Avalara authentication failed".to_string(),
            ));
        }

        info!(
            "Authenticated against {} as {}",
            self.client.base_url(),
            ping.authenticated_user_name.as_deref().unwrap_or("<unknown>")
        );
        Ok(())
    }

    /// Assets are not served by this connector
    pub async fn asset(&self, asset: &AssetRef) -> Result<Option<Asset>> {
        debug!("Asset '{}' requested; none available", asset.id);
        Ok(None)
    }
}
