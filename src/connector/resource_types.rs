use super::resource::{ResourceType, TraitKind};

/// All user objects from AvaTax
pub const USER: ResourceType = ResourceType {
    id: "user",
    display_name: "User",
    description: "Represents an Avalara user",
    traits: &[TraitKind::User],
};

/// Security roles users are assigned to
pub const ROLE: ResourceType = ResourceType {
    id: "role",
    display_name: "Role",
    description: "Represents an Avalara security role",
    traits: &[TraitKind::Role],
};

/// Declared for the host platform; not synced
pub const ACCOUNT: ResourceType = ResourceType {
    id: "account",
    display_name: "Account",
    description: "Represents an Avalara account",
    traits: &[],
};

/// Declared for the host platform; not synced
pub const PERMISSION: ResourceType = ResourceType {
    id: "permission",
    display_name: "Permission",
    description: "Represents an Avalara permission",
    traits: &[],
};

/// Every resource type this connector declares
pub const ALL: &[&ResourceType] = &[&USER, &ROLE, &ACCOUNT, &PERMISSION];
