//! Get command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;
use crate::avalara::PaginationOptions;
use crate::config::api;

/// Resource types for the 'get' command
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// Get users
    #[command(visible_alias = "user")]
    Users(ListArgs),

    /// Get security role definitions
    #[command(visible_alias = "role", visible_alias = "securityroles")]
    Roles(ListArgs),

    /// Get permission names
    #[command(visible_alias = "permission")]
    Permissions(ListArgs),

    /// Get accounts
    #[command(visible_alias = "account")]
    Accounts(ListArgs),

    /// Get the entitlements of one user
    #[command(visible_alias = "entitlement")]
    Entitlements(EntitlementArgs),
}

/// Arguments shared by listing subcommands
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Maximum records per page
    #[arg(long, default_value_t = api::DEFAULT_PAGE_SIZE)]
    pub top: u32,

    /// Records to skip before the first page
    #[arg(long, default_value_t = 0)]
    pub skip: u32,

    /// OData filter expression, e.g. "isActive eq true"
    #[arg(short, long)]
    pub filter: Option<String>,

    /// OData sort expression, e.g. "id desc"
    #[arg(long)]
    pub order_by: Option<String>,

    /// Follow next links and fetch every page
    #[arg(short, long, default_value_t = false)]
    pub all: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

impl ListArgs {
    /// Query options for the first page
    pub fn pagination_options(&self) -> PaginationOptions {
        PaginationOptions {
            top: self.top,
            skip: self.skip,
            order_by: self.order_by.clone(),
            filter: self.filter.clone(),
            next_link: None,
        }
    }
}

/// Arguments for 'get entitlements'
#[derive(Parser, Debug)]
pub struct EntitlementArgs {
    /// Account the user belongs to
    #[arg(long)]
    pub account_id: i64,

    /// User whose entitlements to fetch
    #[arg(long)]
    pub user_id: i64,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
