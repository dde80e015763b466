//! Command-line front end: argument parsing, prompts and the migration flow.

mod commands;
mod output;
mod prompts;
mod resume;

pub use commands::{Cli, report_error, run};
pub use resume::{resume_command, shell_quote};
