//! CLI argument parsing

mod common;
mod get;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{credentials, defaults};

pub use common::OutputFormat;
pub use get::{EntitlementArgs, GetResource, ListArgs};

/// Avalara identity connector
#[derive(Parser, Debug)]
#[command(name = "avalara-connector")]
#[command(version)]
#[command(
    about = "Sync users, security roles and role memberships from Avalara AvaTax",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// AvaTax username (overrides config file)
    #[arg(short = 'u', long, global = true, env = credentials::USERNAME_ENV_VAR)]
    pub username: Option<String>,

    /// AvaTax password (overrides config file)
    #[arg(
        short = 'p',
        long,
        global = true,
        env = credentials::PASSWORD_ENV_VAR,
        hide_env_values = true
    )]
    pub password: Option<String>,

    /// Environment: production, sandbox, test, or an explicit base URL
    #[arg(short = 'e', long, global = true, env = credentials::ENVIRONMENT_ENV_VAR)]
    pub environment: Option<String>,

    /// Config file (default: ~/.avalara-connector/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinners
    #[arg(short, long, global = true, default_value_t = false)]
    pub batch: bool,

    /// Omit header row in table and CSV output
    #[arg(long, global = true, default_value_t = false)]
    pub no_header: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check credentials against the AvaTax ping endpoint
    Validate,

    /// Show connector metadata and declared resource types
    Metadata {
        /// Output format
        #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },

    /// Sync users, roles, entitlements and grants
    Sync(SyncArgs),

    /// Get raw AvaTax records
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },
}

/// Arguments for 'sync'
#[derive(Parser, Debug)]
pub struct SyncArgs {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["avalara-connector", "validate"]);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert!(!cli.batch);
        assert!(!cli.no_header);
        assert!(cli.config.is_none());
        assert!(matches!(cli.command, Command::Validate));
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "avalara-connector",
            "sync",
            "-o",
            "json",
            "--username",
            "alice",
            "--password",
            "secret",
            "-e",
            "sandbox",
            "--batch",
        ]);
        assert_eq!(cli.username.as_deref(), Some("alice"));
        assert_eq!(cli.password.as_deref(), Some("secret"));
        assert_eq!(cli.environment.as_deref(), Some("sandbox"));
        assert!(cli.batch);
        match cli.command {
            Command::Sync(args) => assert_eq!(args.output, OutputFormat::Json),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_metadata_output() {
        let cli = Cli::parse_from(["avalara-connector", "metadata", "-o", "yaml"]);
        assert!(matches!(
            cli.command,
            Command::Metadata {
                output: OutputFormat::Yaml
            }
        ));
    }

    #[test]
    fn test_cli_rejects_unknown_output() {
        assert!(Cli::try_parse_from(["avalara-connector", "sync", "-o", "xml"]).is_err());
    }
}
