//! The sweep engine.
//!
//! A sweep scans each target directory, keeps the entries the [`AgePolicy`]
//! marks eligible and hands them one by one to a [`Trasher`]. A failed move is
//! recorded and the batch carries on.
//!
//! [`Previewer`] selects through the same [`select_eligible`] routine and never
//! touches the trasher, so a preview taken immediately before a sweep lists
//! exactly the entries the sweep will try to trash.

mod preview;
mod types;


pub use preview::Previewer;
pub use types::{
    AggregatedResult, PreviewEntry, PreviewGroup, PreviewResult, SweepFailure, SweepOutcome,
    SweepTarget, TrashedItem,
};

use crate::policy::{AgePolicy, EligibilityDecision};
use crate::scan::{FileRecord, Scanner};
use crate::trash::Trasher;
use chrono::{DateTime, TimeZone};
use std::path::Path;

/// Scan `directory` and keep the eligible records in scan order.
///
/// Returns the number of scanned entries alongside the selection.
pub(crate) fn select_eligible<Tz: TimeZone>(
    scanner: &Scanner,
    policy: &AgePolicy,
    directory: &Path,
    now: &DateTime<Tz>,
) -> (usize, Vec<(FileRecord, EligibilityDecision)>) {
    let records = scanner.scan(directory);
    let found = records.len();
    (found, policy.select(records, now))
}

/// Moves stale entries of the target directories into the trash.
#[derive(Debug, Clone)]
pub struct Sweeper<T> {
    scanner: Scanner,
    policy: AgePolicy,
    trasher: T,
}

impl<T: Trasher> Sweeper<T> {
    pub fn new(scanner: Scanner, policy: AgePolicy, trasher: T) -> Self {
        Self {
            scanner,
            policy,
            trasher,
        }
    }

    pub fn sweep_directory(&self, target: &SweepTarget) -> SweepOutcome {
        self.sweep_directory_at(target, &chrono::Local::now())
    }

    pub fn sweep_all(&self, targets: &[SweepTarget]) -> AggregatedResult {
        self.sweep_all_at(targets, &chrono::Local::now())
    }

    /// Sweep every target in order against a single reference time.
    pub fn sweep_all_at<Tz: TimeZone>(
        &self,
        targets: &[SweepTarget],
        now: &DateTime<Tz>,
    ) -> AggregatedResult {
        AggregatedResult {
            outcomes: targets
                .iter()
                .map(|target| self.sweep_directory_at(target, now))
                .collect(),
        }
    }

    pub fn sweep_directory_at<Tz: TimeZone>(
        &self,
        target: &SweepTarget,
        now: &DateTime<Tz>,
    ) -> SweepOutcome {
        let (found, selected) = select_eligible(&self.scanner, &self.policy, &target.path, now);

        let mut outcome = SweepOutcome {
            label: target.label.clone(),
            directory: target.path.clone(),
            found,
            eligible: selected.len(),
            trashed: Vec::new(),
            failures: Vec::new(),
        };

        for (record, decision) in selected {
            match self.trasher.trash(&record.path) {
                Ok(()) => outcome.trashed.push(TrashedItem {
                    path: record.path,
                    age_hours: decision.age_hours,
                }),
                Err(e) => outcome.failures.push(SweepFailure {
                    path: record.path,
                    reason: e.to_string(),
                }),
            }
        }

        outcome
    }
}
