#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! gh-activity — fetch and display a GitHub user's recent public activity.

mod activity;
mod cli;
mod commands;
mod github;

use clap::Parser;
use clap::error::ErrorKind;

use cli::{Cli, OutputCtx, write_error};

fn main() {
    // clap exits with 2 on usage errors by default; this tool's contract is
    // 0 on success and 1 on any error, so parse failures are remapped here.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return;
        }
        Err(err) => {
            let _ = err.print();
            std::process::exit(1);
        }
    };

    let ctx = OutputCtx::new(cli.debug);

    match commands::run(&cli, &ctx) {
        Ok(()) => {}
        Err(err) => {
            write_error(&err);
            std::process::exit(1);
        }
    }
}
