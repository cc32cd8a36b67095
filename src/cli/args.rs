/// CLI argument definitions via clap derive.
use clap::Parser;

/// gh-activity — fetch and display a GitHub user's recent public activity.
#[derive(Debug, Parser)]
#[command(
    name = "gh-activity",
    about = "Fetch and display a GitHub user's recent public activity",
    version
)]
pub struct Cli {
    /// GitHub username to fetch activity for.
    #[arg(value_name = "USERNAME", value_parser = parse_username)]
    pub username: String,

    /// Print request timing to stderr for debugging.
    #[arg(long)]
    pub debug: bool,
}

/// Reject blank usernames at parse time, before any network activity.
fn parse_username(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err("username cannot be empty".to_owned())
    } else {
        Ok(trimmed.to_owned())
    }
}
