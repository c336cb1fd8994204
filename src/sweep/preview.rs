//! Dry-run projection of a sweep.

use super::select_eligible;
use super::types::{PreviewEntry, PreviewGroup, PreviewResult, SweepTarget};
use crate::policy::AgePolicy;
use crate::scan::Scanner;
use chrono::{DateTime, Local, TimeZone};
use std::path::Path;

/// Reports what a [`Sweeper`](super::Sweeper) with the same policy would trash.
#[derive(Debug, Clone, Copy, Default)]
pub struct Previewer {
    scanner: Scanner,
    policy: AgePolicy,
}

impl Previewer {
    pub fn new(scanner: Scanner, policy: AgePolicy) -> Self {
        Self { scanner, policy }
    }

    pub fn preview_directory(&self, directory: &Path) -> Vec<PreviewEntry> {
        self.preview_directory_at(directory, &Local::now()).1
    }

    pub fn preview_all(&self, targets: &[SweepTarget]) -> PreviewResult {
        self.preview_all_at(targets, &Local::now())
    }

    pub fn preview_all_at<Tz: TimeZone>(
        &self,
        targets: &[SweepTarget],
        now: &DateTime<Tz>,
    ) -> PreviewResult {
        let groups = targets
            .iter()
            .map(|target| {
                let (found, entries) = self.preview_directory_at(&target.path, now);
                PreviewGroup {
                    label: target.label.clone(),
                    directory: target.path.clone(),
                    found,
                    entries,
                }
            })
            .collect();

        PreviewResult { groups }
    }

    /// Returns the scanned entry count and the eligible entries.
    pub fn preview_directory_at<Tz: TimeZone>(
        &self,
        directory: &Path,
        now: &DateTime<Tz>,
    ) -> (usize, Vec<PreviewEntry>) {
        let (found, selected) = select_eligible(&self.scanner, &self.policy, directory, now);
        let entries = selected
            .into_iter()
            .map(|(record, decision)| PreviewEntry {
                record,
                age_hours: decision.age_hours,
                age_days: decision.age_days,
            })
            .collect();
        (found, entries)
    }
}
