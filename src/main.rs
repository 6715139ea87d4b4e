//! Bumpscan: detects legitimate version bumps in recipe repositories.
//!
//! This is the main entry point for the `bumpscan` CLI. It parses arguments,
//! runs the detection pipeline, and handles errors with proper exit codes.

mod cli;
mod commands;
pub mod detect;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod git;
pub mod recipe;
pub mod report;
pub mod urls;
pub mod version;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::run(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
