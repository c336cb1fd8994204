//! Real run: move stale entries to the trash.

use super::logging::{log_complete, log_start, log_sweep};
use crate::context::SweepContext;
use crate::events::EventLog;
use crate::notify::Notifier;
use crate::policy::AgePolicy;
use crate::scan::Scanner;
use crate::sweep::{AggregatedResult, Sweeper};
use std::time::Instant;

/// Sweep every target of `ctx`, log the run and prune old day files.
///
/// Sends one notification through `notifier` when given. Per-item failures are
/// part of the result; nothing here aborts the run.
pub fn run_sweep(ctx: &SweepContext, notifier: Option<&Notifier>) -> AggregatedResult {
    let started = Instant::now();
    let log = EventLog::new(&ctx.log_dir);
    log_start(&log);

    let policy = AgePolicy::new(ctx.config.threshold_hours);
    let sweeper = Sweeper::new(Scanner::new(), policy, &ctx.trash);
    let result = sweeper.sweep_all(&ctx.targets);

    log_sweep(&log, &result);
    log_complete(
        &log,
        result.trashed_count(),
        result.error_count(),
        started.elapsed(),
    );

    let removed = log.cleanup(ctx.config.retention_days);
    if removed > 0 {
        println!("Removed {} old log file(s).", removed);
    }

    if let Some(notifier) = notifier
        && !notifier.notify(&result)
    {
        eprintln!("Warning: failed to send desktop notification");
    }

    result
}
