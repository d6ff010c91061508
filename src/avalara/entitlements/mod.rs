//! Entitlements module - per-user permission and company access

mod api;
mod commands;
mod models;

pub use commands::run_entitlements_command;
pub use models::{AccessLevel, EntitlementResponse};
