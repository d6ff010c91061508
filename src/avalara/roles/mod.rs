//! Roles module - list AvaTax security role definitions

mod api;
mod commands;
mod models;

pub use commands::run_roles_command;
pub use models::{SecurityRoleModel, SecurityRoleResponse};
