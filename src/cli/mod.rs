//! CLI argument parsing for desksweep.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The run itself is implemented in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

/// Desksweep: move stale files from Downloads and Desktop to the trash.
///
/// Entries older than the age threshold (72 hours by default) are moved to the
/// trash, never deleted. Every run is recorded in a dated event log under
/// ~/.desksweep/logs.
#[derive(Parser, Debug)]
#[command(name = "desksweep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// List what would be moved to the trash without touching anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Path to the config file (default: ~/.desksweep/config.yaml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the age threshold in hours.
    #[arg(long, value_name = "HOURS")]
    pub threshold_hours: Option<u32>,

    /// Do not send a desktop notification.
    #[arg(long)]
    pub no_notify: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
