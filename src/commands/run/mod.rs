//! Implementation of a desksweep run.
//!
//! A real run sweeps every target, records the run in the event log, prunes
//! day files past the retention window, prints a report and sends a single
//! desktop notification.
//!
//! With `--dry-run` the targets are only previewed. The log still gets
//! `start`, `scan` and `complete` events, but nothing is moved, pruned or
//! announced.

mod display;
mod logging;
mod preview;
mod sweep;


use crate::cli::Cli;
use crate::context::SweepContext;
use crate::error::Result;
use crate::notify::Notifier;

use display::{print_preview, print_sweep_report};
use preview::run_preview;
use sweep::run_sweep;

/// Execute a desksweep run for the parsed command line.
pub fn cmd_run(cli: Cli) -> Result<()> {
    let ctx = SweepContext::resolve(cli.config.as_deref())?
        .with_threshold_hours(cli.threshold_hours)?;

    if cli.dry_run {
        let preview = run_preview(&ctx);
        print_preview(&preview, &ctx.home);
        return Ok(());
    }

    let notifier = (ctx.config.notify && !cli.no_notify)
        .then(|| Notifier::new(ctx.config.notify_command.clone()));
    let result = run_sweep(&ctx, notifier.as_ref());
    print_sweep_report(&result, &ctx.home, ctx.trash.files_dir());

    Ok(())
}
