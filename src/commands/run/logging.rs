//! Event log entries for a run.

use crate::events::{EventLog, LogEvent};
use crate::sweep::{AggregatedResult, PreviewResult};
use std::time::Duration;

/// Version recorded in `start` events.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn log_start(log: &EventLog) {
    log.log(LogEvent::Start {
        version: VERSION.to_string(),
    });
}

/// Log one `scan` event per target, then its `trash` and `error` events.
pub fn log_sweep(log: &EventLog, result: &AggregatedResult) {
    for outcome in &result.outcomes {
        log.log(LogEvent::Scan {
            directory: outcome.label.clone(),
            found: outcome.found,
            old: outcome.eligible,
        });
        for item in &outcome.trashed {
            log.log(LogEvent::Trash {
                file: item.file_name(),
                directory: outcome.label.clone(),
                age_hours: item.age_hours,
            });
        }
        for failure in &outcome.failures {
            log.log(LogEvent::Error {
                file: failure.file_name(),
                error: failure.reason.clone(),
            });
        }
    }
}

/// Log one `scan` event per previewed target.
pub fn log_preview(log: &EventLog, preview: &PreviewResult) {
    for group in &preview.groups {
        log.log(LogEvent::Scan {
            directory: group.label.clone(),
            found: group.found,
            old: group.entries.len(),
        });
    }
}

pub fn log_complete(log: &EventLog, trashed: usize, errors: usize, elapsed: Duration) {
    log.log(LogEvent::Complete {
        trashed,
        errors,
        duration_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
    });
}
