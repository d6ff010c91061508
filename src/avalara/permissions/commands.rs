//! Permission command handlers

use crate::avalara::{AvalaraClient, PermissionResponse};
use crate::cli::{Cli, Command, GetResource};
use crate::config::api;
use crate::output::{output_rows, PermissionRow};
use crate::ui::{create_spinner, finish_spinner};

/// Run the permission list command
pub async fn run_permissions_command(
    client: &AvalaraClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Permissions(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner("Fetching permissions...", cli.batch);
    let result = client
        .fetch_pages::<PermissionResponse>(
            api::PERMISSIONS,
            args.pagination_options(),
            args.all,
            "permissions",
        )
        .await;
    finish_spinner(spinner);

    let permissions: Vec<PermissionRow> = result?.into_iter().map(PermissionRow).collect();
    if permissions.is_empty() {
        eprintln!("No permissions found");
        return Ok(());
    }

    output_rows(&permissions, args.output, cli.no_header);
    Ok(())
}
