//! Account command handlers

use crate::avalara::{AccountResponse, AvalaraClient};
use crate::cli::{Cli, Command, GetResource};
use crate::config::api;
use crate::output::output_rows;
use crate::ui::{create_spinner, finish_spinner};

/// Run the account list command
pub async fn run_accounts_command(
    client: &AvalaraClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Accounts(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner("Fetching accounts...", cli.batch);
    let result = client
        .fetch_pages::<AccountResponse>(
            api::ACCOUNTS,
            args.pagination_options(),
            args.all,
            "accounts",
        )
        .await;
    finish_spinner(spinner);
    let accounts = result?;

    if accounts.is_empty() {
        eprintln!("No accounts found");
        return Ok(());
    }

    output_rows(&accounts, args.output, cli.no_header);
    Ok(())
}
