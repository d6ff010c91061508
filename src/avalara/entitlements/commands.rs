//! User entitlement command handlers

use crate::avalara::AvalaraClient;
use crate::cli::{Cli, Command, GetResource};
use crate::output::output_rows;
use crate::ui::{create_spinner, finish_spinner};

/// Run the user entitlements command
pub async fn run_entitlements_command(
    client: &AvalaraClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Entitlements(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner(
        &format!(
            "Fetching entitlements of user {} in account {}...",
            args.user_id, args.account_id
        ),
        cli.batch,
    );
    let result = client
        .get_user_entitlements(args.account_id, args.user_id)
        .await;
    finish_spinner(spinner);
    let entitlements = result.map_err(|e| {
        e.context(format!(
            "failed to get entitlements of user {}",
            args.user_id
        ))
    })?;

    output_rows(&[entitlements], args.output, cli.no_header);
    Ok(())
}
