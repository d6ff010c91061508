//! Accounts module - list AvaTax accounts

mod api;
mod commands;
mod models;

pub use commands::run_accounts_command;
pub use models::{AccountModel, AccountResponse};
