/// The single command flow: fetch a user's recent events and print them.
use crate::activity::format_activity;
use crate::cli::OutputCtx;
use crate::cli::args::Cli;
use crate::cli::output::write_activity;
use crate::github::{EventsClient, FetchError};

/// Run the fetch-and-display flow for the requested username.
///
/// # Errors
///
/// Returns `FetchError` on any HTTP, API, or response-decoding failure.
pub fn run(cli: &Cli, ctx: &OutputCtx) -> Result<(), FetchError> {
    let client = EventsClient::new()?;

    let _t_fetch = ctx.timer("fetch_user_events");
    let events = client.fetch_user_events(&cli.username)?;
    drop(_t_fetch);

    if events.is_empty() {
        println!("No recent activity found.");
        return Ok(());
    }

    write_activity(&format_activity(&events));
    Ok(())
}
