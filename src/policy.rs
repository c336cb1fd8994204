//! Age-based eligibility.
//!
//! Eligibility is decided on the raw elapsed time against an hour threshold.
//! The day count is a display figure computed on the wall clock of `now`'s
//! time zone and may disagree with the threshold near day boundaries: an entry
//! exactly 72 hours old reports 3 days yet is not eligible under the default
//! threshold.

use crate::scan::FileRecord;
use chrono::{DateTime, Duration, TimeZone};

/// Default age threshold, in hours.
pub const DEFAULT_THRESHOLD_HOURS: u32 = 72;

/// Derived classification of one record at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibilityDecision {
    pub is_eligible: bool,
    pub age_hours: i64,
    pub age_days: i64,
}

/// Decides which records are old enough to be swept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgePolicy {
    threshold_hours: u32,
}

impl Default for AgePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD_HOURS)
    }
}

impl AgePolicy {
    pub fn new(threshold_hours: u32) -> Self {
        Self { threshold_hours }
    }

    /// True only when the record is strictly older than the threshold.
    pub fn is_eligible<Tz: TimeZone>(&self, record: &FileRecord, now: &DateTime<Tz>) -> bool {
        elapsed(record, now) > Duration::hours(i64::from(self.threshold_hours))
    }

    pub fn decide<Tz: TimeZone>(&self, record: &FileRecord, now: &DateTime<Tz>) -> EligibilityDecision {
        EligibilityDecision {
            is_eligible: self.is_eligible(record, now),
            age_hours: age_hours(record, now),
            age_days: age_days(record, now),
        }
    }

    /// Keep the eligible records, in their original order, with their decisions.
    ///
    /// Both the sweep and the preview select through this function.
    pub fn select<Tz: TimeZone>(
        &self,
        records: Vec<FileRecord>,
        now: &DateTime<Tz>,
    ) -> Vec<(FileRecord, EligibilityDecision)> {
        records
            .into_iter()
            .filter_map(|record| {
                let decision = self.decide(&record, now);
                decision.is_eligible.then_some((record, decision))
            })
            .collect()
    }
}

fn elapsed<Tz: TimeZone>(record: &FileRecord, now: &DateTime<Tz>) -> Duration {
    now.clone().signed_duration_since(record.modified_at)
}

/// Whole hours since the record was modified, truncated toward zero.
pub fn age_hours<Tz: TimeZone>(record: &FileRecord, now: &DateTime<Tz>) -> i64 {
    elapsed(record, now).num_hours()
}

/// Complete calendar days between the modification time and `now`, measured
/// on the wall clock of `now`'s time zone and truncated toward zero.
pub fn age_days<Tz: TimeZone>(record: &FileRecord, now: &DateTime<Tz>) -> i64 {
    let now_local = now.naive_local();
    let modified_local = record.modified_at.with_timezone(&now.timezone()).naive_local();

    let mut days = (now_local.date() - modified_local.date()).num_days();
    if days > 0 && now_local.time() < modified_local.time() {
        days -= 1;
    } else if days < 0 && now_local.time() > modified_local.time() {
        days += 1;
    }
    days
}
