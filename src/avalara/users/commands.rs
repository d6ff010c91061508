//! User command handlers

use log::debug;

use crate::avalara::{AvalaraClient, UserResponse};
use crate::cli::{Cli, Command, GetResource};
use crate::config::api;
use crate::output::output_rows;
use crate::ui::{create_spinner, finish_spinner};

/// Run the user list command
pub async fn run_users_command(
    client: &AvalaraClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Users(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner("Fetching users...", cli.batch);
    let result = client
        .fetch_pages::<UserResponse>(api::USERS, args.pagination_options(), args.all, "users")
        .await;
    finish_spinner(spinner);
    let users = result?;

    debug!("Fetched {} users", users.len());

    if users.is_empty() {
        eprintln!("No users found");
        return Ok(());
    }

    output_rows(&users, args.output, cli.no_header);
    Ok(())
}
