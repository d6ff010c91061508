//! Avalara connector - sync AvaTax identities into a governance resource graph
//!
//! Reads users and security roles from the AvaTax REST v2 API and maps them
//! onto resources, entitlements and grants.
//!
//! # Features
//!
//! - Basic-auth AvaTax client with OData paging (`$top`, `$skip`, `$filter`, `$orderby`)
//! - User and role syncers driven by opaque page tokens
//! - Role membership grants derived from each user's security role
//! - Table, CSV, JSON and YAML output
//!
//! # Example
//!
//! ```bash
//! # Check credentials
//! avalara-connector validate -u alice -p secret -e sandbox
//!
//! # Sync everything as JSON
//! avalara-connector sync -o json
//!
//! # List active users, all pages
//! avalara-connector get users -f "isActive eq true" --all
//! ```

pub mod avalara;
pub mod cli;
pub mod config;
pub mod connector;
pub mod error;
pub mod output;
pub mod ui;

pub use avalara::{
    run_accounts_command, run_entitlements_command, run_permissions_command, run_roles_command,
    run_users_command, AvalaraClient, ConnectorConfig, FileConfig, PaginationOptions,
};
pub use cli::{Cli, Command, GetResource, OutputFormat};
pub use connector::{
    run_metadata_command, run_sync_command, run_validate_command, Avalara, ResourceSyncer,
    SyncReport,
};
pub use error::{ConnectorError, Result};
