/// CLI layer: argument parsing and output rendering.
pub mod args;
pub mod output;

pub use args::Cli;
pub use output::{OutputCtx, write_error};
