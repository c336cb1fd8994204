//! Command implementations for desksweep.
//!
//! This module provides the dispatcher that routes the parsed command line
//! to its implementation.

mod run;

use crate::cli::Cli;
use crate::error::Result;

/// Dispatch the parsed command line to its implementation.
///
/// This is the main entry point for command execution.
pub fn dispatch(cli: Cli) -> Result<()> {
    run::cmd_run(cli)
}
