//! Permissions module - list AvaTax permission names

mod api;
mod commands;

pub use api::PermissionResponse;
pub use commands::run_permissions_command;
