//! Security role command handlers

use crate::avalara::{AvalaraClient, SecurityRoleResponse};
use crate::cli::{Cli, Command, GetResource};
use crate::config::api;
use crate::output::output_rows;
use crate::ui::{create_spinner, finish_spinner};

/// Run the role list command
pub async fn run_roles_command(
    client: &AvalaraClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Roles(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner("Fetching security roles...", cli.batch);
    let result = client
        .fetch_pages::<SecurityRoleResponse>(
            api::SECURITY_ROLES,
            args.pagination_options(),
            args.all,
            "security roles",
        )
        .await;
    finish_spinner(spinner);
    let roles = result?;

    if roles.is_empty() {
        eprintln!("No security roles found");
        return Ok(());
    }

    output_rows(&roles, args.output, cli.no_header);
    Ok(())
}
