//! Data types for sweeps and previews.

use crate::scan::{FileRecord, display_name};
use std::path::PathBuf;

/// A watched directory and the label used for it in logs and reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepTarget {
    pub label: String,
    pub path: PathBuf,
}

impl SweepTarget {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// An entry that was moved to the trash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrashedItem {
    pub path: PathBuf,
    /// Age at the moment of the sweep, in whole hours.
    pub age_hours: i64,
}

impl TrashedItem {
    pub fn file_name(&self) -> String {
        display_name(&self.path)
    }
}

/// An eligible entry the trasher could not move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepFailure {
    pub path: PathBuf,
    pub reason: String,
}

impl SweepFailure {
    pub fn file_name(&self) -> String {
        display_name(&self.path)
    }
}

/// Result of sweeping one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepOutcome {
    pub label: String,
    pub directory: PathBuf,
    /// Number of visible entries the scan returned.
    pub found: usize,
    /// Number of entries past the age threshold.
    pub eligible: usize,
    pub trashed: Vec<TrashedItem>,
    pub failures: Vec<SweepFailure>,
}

impl SweepOutcome {
    pub fn is_empty(&self) -> bool {
        self.trashed.is_empty() && self.failures.is_empty()
    }
}

/// Outcomes of every target of one invocation, in target order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedResult {
    pub outcomes: Vec<SweepOutcome>,
}

impl AggregatedResult {
    /// Failures of all targets, concatenated in target order.
    pub fn failures(&self) -> impl Iterator<Item = &SweepFailure> {
        self.outcomes.iter().flat_map(|o| o.failures.iter())
    }

    pub fn trashed_count(&self) -> usize {
        self.outcomes.iter().map(|o| o.trashed.len()).sum()
    }

    pub fn error_count(&self) -> usize {
        self.outcomes.iter().map(|o| o.failures.len()).sum()
    }
}

/// An entry a sweep would trash right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewEntry {
    pub record: FileRecord,
    pub age_hours: i64,
    pub age_days: i64,
}

/// Preview entries of one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewGroup {
    pub label: String,
    pub directory: PathBuf,
    /// Number of visible entries the scan returned.
    pub found: usize,
    pub entries: Vec<PreviewEntry>,
}

/// Dry-run projection grouped by target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewResult {
    pub groups: Vec<PreviewGroup>,
}

impl PreviewResult {
    pub fn total_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }
}
