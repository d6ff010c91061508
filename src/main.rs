//! Avalara connector - Main entry point

use clap::Parser;
use log::{debug, info};
use std::process::ExitCode;

use avalara_connector::{
    run_accounts_command, run_entitlements_command, run_metadata_command,
    run_permissions_command, run_roles_command, run_sync_command, run_users_command,
    run_validate_command, Avalara, Cli, Command, ConnectorConfig, FileConfig, GetResource,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting avalara-connector v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn run(cli: &Cli) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let file = match cli.config.clone().or_else(FileConfig::default_path) {
        Some(path) => FileConfig::load(&path)?,
        None => FileConfig::default(),
    };

    let config = ConnectorConfig::resolve(
        cli.username.as_deref(),
        cli.password.as_deref(),
        cli.environment.as_deref(),
        &file,
    );
    debug!(
        "Resolved environment '{}' for user '{}'",
        config.environment, config.username
    );

    let connector = Avalara::connect(&config)?;

    match &cli.command {
        Command::Validate => run_validate_command(&connector, cli).await,
        Command::Metadata { .. } => run_metadata_command(&connector, cli),
        Command::Sync(_) => run_sync_command(&connector, cli).await,
        Command::Get { resource } => {
            let client = connector.client();
            match resource {
                GetResource::Users(_) => run_users_command(client, cli).await,
                GetResource::Roles(_) => run_roles_command(client, cli).await,
                GetResource::Permissions(_) => run_permissions_command(client, cli).await,
                GetResource::Accounts(_) => run_accounts_command(client, cli).await,
                GetResource::Entitlements(_) => run_entitlements_command(client, cli).await,
            }
        }
    }
}
