//! Desksweep: move stale files from Downloads and Desktop to the trash.
//!
//! This is the main entry point for the `desksweep` CLI. It parses arguments,
//! dispatches to the run implementation, and handles errors with proper exit
//! codes.

mod cli;
mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod notify;
pub mod policy;
pub mod scan;
pub mod sweep;
pub mod trash;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
