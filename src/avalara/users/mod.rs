//! Users module - list AvaTax users

mod api;
mod commands;
mod models;

pub use commands::run_users_command;
pub use models::{UserModel, UserResponse};
