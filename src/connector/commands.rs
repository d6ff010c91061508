//! Connector command handlers

use log::debug;

use super::{resource_types, sync_all, Avalara};
use crate::cli::{Cli, Command};
use crate::output::{output_metadata, output_sync_report};
use crate::ui::{create_spinner, finish_spinner, finish_spinner_with_message, update_spinner};

/// Run the validate command
pub async fn run_validate_command(
    connector: &Avalara,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner(
        &format!("Validating credentials against {}...", connector.client().base_url()),
        cli.batch,
    );

    match connector.validate().await {
        Ok(()) => {
            finish_spinner_with_message(spinner, "Credentials are valid");
            if cli.batch {
                println!("Credentials are valid");
            }
            Ok(())
        }
        Err(e) => {
            finish_spinner(spinner);
            Err(e.into())
        }
    }
}

/// Run the metadata command
pub fn run_metadata_command(
    connector: &Avalara,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Metadata { output } = &cli.command else {
        unreachable!()
    };

    output_metadata(
        &connector.metadata(),
        resource_types::ALL,
        *output,
        cli.no_header,
    );
    Ok(())
}

/// Run the sync command
pub async fn run_sync_command(
    connector: &Avalara,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Sync(args) = &cli.command else {
        unreachable!()
    };

    let syncers = connector.resource_syncers();
    let spinner = create_spinner("Syncing users and roles...", cli.batch);

    let result = sync_all(&syncers, |progress| {
        debug!(
            "Synced {}: {} resources, {} entitlements, {} grants so far",
            progress.resource_type, progress.resources, progress.entitlements, progress.grants
        );
        update_spinner(
            &spinner,
            &format!(
                "Synced {} ({} resources, {} grants)...",
                progress.resource_type, progress.resources, progress.grants
            ),
        );
    })
    .await;

    finish_spinner(spinner);
    let report = result?;

    output_sync_report(&report, args.output, cli.no_header);

    if !args.output.is_structured() {
        eprintln!(
            "Synced {} resources, {} entitlements, {} grants in {} ms",
            report.resources.len(),
            report.entitlements.len(),
            report.grants.len(),
            (report.finished_at - report.started_at).num_milliseconds()
        );
    }
    Ok(())
}
