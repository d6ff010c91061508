//! Normalized resource / entitlement / grant model consumed by the host platform

use serde::Serialize;
use std::fmt;

use crate::error::{ConnectorError, Result};

/// Free-form profile attached to user and role traits
pub type Profile = serde_json::Map<String, serde_json::Value>;

/// Trait flags a resource type declares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitKind {
    User,
    Role,
}

/// Kind of resource exposed to the host platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceType {
    pub id: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub traits: &'static [TraitKind],
}

/// Identifier of a resource: its type plus the upstream id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResourceId {
    pub resource_type: String,
    pub resource: String,
}

impl ResourceId {
    pub fn new(resource_type: &ResourceType, resource: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.id.to_string(),
            resource: resource.into(),
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resource_type, self.resource)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Enabled,
    Disabled,
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserStatus::Enabled => write!(f, "enabled"),
            UserStatus::Disabled => write!(f, "disabled"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Email {
    pub address: String,
    pub is_primary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserTrait {
    pub profile: Profile,
    pub status: UserStatus,
    pub login: String,
    pub emails: Vec<Email>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleTrait {
    pub profile: Profile,
}

/// Trait data carried by a resource
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Traits {
    User(UserTrait),
    Role(RoleTrait),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    pub id: ResourceId,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_resource_id: Option<ResourceId>,
    pub traits: Traits,
}

impl Resource {
    /// Create a user resource
    pub fn user(
        display_name: impl Into<String>,
        resource_type: &ResourceType,
        id: impl Into<String>,
        user_trait: UserTrait,
        parent: Option<&ResourceId>,
    ) -> Result<Self> {
        Self::build(display_name, resource_type, id, Traits::User(user_trait), parent)
    }

    /// Create a role resource
    pub fn role(
        display_name: impl Into<String>,
        resource_type: &ResourceType,
        id: impl Into<String>,
        role_trait: RoleTrait,
        parent: Option<&ResourceId>,
    ) -> Result<Self> {
        Self::build(display_name, resource_type, id, Traits::Role(role_trait), parent)
    }

    fn build(
        display_name: impl Into<String>,
        resource_type: &ResourceType,
        id: impl Into<String>,
        traits: Traits,
        parent: Option<&ResourceId>,
    ) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConnectorError::Config(format!(
                "{} resource id must not be empty",
                resource_type.id
            )));
        }

        let declared = match traits {
            Traits::User(_) => TraitKind::User,
            Traits::Role(_) => TraitKind::Role,
        };
        if !resource_type.traits.contains(&declared) {
            return Err(ConnectorError::Config(format!(
                "resource type '{}' does not declare the {:?} trait",
                resource_type.id, declared
            )));
        }

        Ok(Self {
            id: ResourceId::new(resource_type, id),
            display_name: display_name.into(),
            parent_resource_id: parent.cloned(),
            traits,
        })
    }

    pub fn role_trait(&self) -> Result<&RoleTrait> {
        match &self.traits {
            Traits::Role(role) => Ok(role),
            _ => Err(ConnectorError::Config(format!(
                "resource {} has no role trait",
                self.id
            ))),
        }
    }

    pub fn profile(&self) -> &Profile {
        match &self.traits {
            Traits::User(user) => &user.profile,
            Traits::Role(role) => &role.profile,
        }
    }

    /// String value of a profile field
    pub fn profile_string(&self, key: &str) -> Option<&str> {
        self.profile().get(key).and_then(|v| v.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntitlementPurpose {
    Assignment,
}

/// Grantable capability attached to a resource
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entitlement {
    pub id: String,
    pub resource: ResourceId,
    pub display_name: String,
    pub description: String,
    pub grantable_to: Vec<String>,
    pub purpose: EntitlementPurpose,
    pub slug: String,
}

/// Entitlement id for `slug` on `resource`, e.g. `role:3:member`
pub fn entitlement_id(resource: &ResourceId, slug: &str) -> String {
    format!("{}:{}", resource, slug)
}

impl Entitlement {
    /// Assignment entitlement (membership of `resource`)
    pub fn assignment(resource: &Resource, slug: &str) -> Self {
        Self {
            id: entitlement_id(&resource.id, slug),
            resource: resource.id.clone(),
            display_name: slug.to_string(),
            description: String::new(),
            grantable_to: Vec::new(),
            purpose: EntitlementPurpose::Assignment,
            slug: slug.to_string(),
        }
    }

    pub fn with_grantable_to(mut self, resource_type: &ResourceType) -> Self {
        self.grantable_to.push(resource_type.id.to_string());
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Edge recording that `principal` holds an entitlement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grant {
    pub id: String,
    pub entitlement_id: String,
    pub resource: ResourceId,
    pub principal: ResourceId,
}

impl Grant {
    pub fn new(resource: &Resource, slug: &str, principal: ResourceId) -> Self {
        let entitlement_id = entitlement_id(&resource.id, slug);
        Self {
            id: format!("{}:{}", entitlement_id, principal),
            entitlement_id,
            resource: resource.id.clone(),
            principal,
        }
    }
}

/// Static description of the connector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectorMetadata {
    pub display_name: String,
    pub description: String,
}

/// Reference to an asset (e.g. an icon) held by the upstream service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef {
    pub id: String,
}

/// Asset content type and payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub content_type: String,
    pub data: Vec<u8>,
}
