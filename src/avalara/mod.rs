//! AvaTax API client module
//!
//! This module provides functionality to read identity data from the
//! AvaTax REST v2 API: users, security roles, permissions, accounts and
//! per-user entitlements.

pub mod accounts;
mod client;
mod credentials;
pub mod entitlements;
mod nullable;
pub mod pagination;
pub mod permissions;
pub mod roles;
pub mod users;
pub mod utilities;

pub use accounts::{run_accounts_command, AccountModel, AccountResponse};
pub use client::{base_url_for, client_identification, AvalaraClient};
pub use credentials::{ConnectorConfig, FileConfig};
pub use entitlements::{run_entitlements_command, AccessLevel, EntitlementResponse};
pub use pagination::{ListResponse, PaginatedResponse, PaginationOptions};
pub use permissions::{run_permissions_command, PermissionResponse};
pub use roles::{run_roles_command, SecurityRoleModel, SecurityRoleResponse};
pub use users::{run_users_command, UserModel, UserResponse};
pub use utilities::PingResponse;
