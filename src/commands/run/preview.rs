//! Dry run: report what a sweep would trash.

use super::logging::{log_complete, log_preview, log_start};
use crate::context::SweepContext;
use crate::events::EventLog;
use crate::policy::AgePolicy;
use crate::scan::Scanner;
use crate::sweep::{PreviewResult, Previewer};
use std::time::Instant;

/// Preview every target of `ctx` and log `start`, `scan` and `complete` events.
///
/// Nothing is moved, no day file is pruned and no notification is sent.
pub fn run_preview(ctx: &SweepContext) -> PreviewResult {
    let started = Instant::now();
    let log = EventLog::new(&ctx.log_dir);
    log_start(&log);

    let previewer = Previewer::new(Scanner::new(), AgePolicy::new(ctx.config.threshold_hours));
    let preview = previewer.preview_all(&ctx.targets);

    log_preview(&log, &preview);
    log_complete(&log, 0, 0, started.elapsed());

    preview
}
