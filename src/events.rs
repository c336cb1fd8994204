//! Event log for desksweep.
//!
//! Every run appends structured events to a per-day log file in NDJSON format
//! (one JSON object per line) named `<YYYY-MM-DD>.log` after the local date.
//! Files are only ever appended to or deleted whole by [`EventLog::cleanup`].
//!
//! # Event Format
//!
//! Each line is a JSON object with:
//! - `timestamp`: RFC3339 time the entry was written
//! - `actor`: the owner string (e.g., `user@HOST`)
//! - `action`: `start`, `scan`, `trash`, `error` or `complete`
//! - action-specific fields (see [`LogEvent`])
//!
//! Readers should ignore fields they do not know.
//!
//! Logging is best-effort: I/O failures are reported on stderr and otherwise
//! ignored, so a broken log directory never stops a sweep.

use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Extension of day files.
pub const LOG_EXTENSION: &str = "log";

/// Format of the day-file stem.
pub const LOG_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default number of days of logs kept by [`EventLog::cleanup`].
pub const DEFAULT_RETENTION_DAYS: u32 = 30;

/// One recorded event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum LogEvent {
    /// A run began.
    Start { version: String },
    /// A target directory was scanned.
    Scan {
        directory: String,
        found: usize,
        /// Entries past the age threshold.
        old: usize,
    },
    /// An entry was moved to the trash.
    Trash {
        file: String,
        directory: String,
        age_hours: i64,
    },
    /// An entry could not be moved.
    Error { file: String, error: String },
    /// A run finished.
    Complete {
        trashed: usize,
        errors: usize,
        duration_ms: u64,
    },
}

/// A log line: the event plus the time and actor that wrote it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,

    pub actor: String,

    #[serde(flatten)]
    pub event: LogEvent,
}

impl LogEntry {
    /// Stamp `event` with the current time and actor.
    pub fn new(event: LogEvent) -> Self {
        Self {
            timestamp: Utc::now(),
            actor: get_actor_string(),
            event,
        }
    }

    /// Serialize the entry to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Get the actor string for event metadata.
fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append-only, day-partitioned event log.
#[derive(Debug, Clone)]
pub struct EventLog {
    log_dir: PathBuf,
}

impl EventLog {
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
        }
    }

    /// Path of the day file for `date`.
    pub fn log_file_for(&self, date: NaiveDate) -> PathBuf {
        self.log_dir.join(format!(
            "{}.{}",
            date.format(LOG_DATE_FORMAT),
            LOG_EXTENSION
        ))
    }

    /// Append `event` to today's file.
    pub fn log(&self, event: LogEvent) {
        let entry = LogEntry::new(event);
        if let Err(e) = self.append(&entry, Local::now().date_naive()) {
            eprintln!(
                "Warning: failed to write event log in '{}': {}",
                self.log_dir.display(),
                e
            );
        }
    }

    /// Append `entry` as one line to the day file for `date`.
    ///
    /// The file is opened in append mode, so existing lines are never
    /// rewritten or reordered.
    pub fn append(&self, entry: &LogEntry, date: NaiveDate) -> io::Result<()> {
        let json_line = entry.to_ndjson_line().map_err(io::Error::other)?;

        if !self.log_dir.exists() {
            fs::create_dir_all(&self.log_dir)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.log_file_for(date))?;

        writeln!(file, "{}", json_line)?;
        file.sync_all()
    }

    /// Delete day files dated strictly before `today - retention_days`.
    ///
    /// Returns how many files were removed. Files whose name is not a date are
    /// left alone; failures are ignored.
    pub fn cleanup(&self, retention_days: u32) -> usize {
        self.cleanup_relative_to(Local::now().date_naive(), retention_days)
    }

    pub fn cleanup_relative_to(&self, today: NaiveDate, retention_days: u32) -> usize {
        let Some(cutoff) = today.checked_sub_signed(Duration::days(i64::from(retention_days)))
        else {
            return 0;
        };

        let entries = match fs::read_dir(&self.log_dir) {
            Ok(entries) => entries,
            Err(_) => return 0,
        };

        let mut removed = 0;
        for entry in entries.flatten() {
            let path = entry.path();
            if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
                continue;
            }
            let Some(date) = parse_log_date(&path) else {
                continue;
            };
            if date < cutoff && fs::remove_file(&path).is_ok() {
                removed += 1;
            }
        }

        removed
    }
}

/// Date encoded in a day file's name, if it is one.
pub fn parse_log_date(path: &Path) -> Option<NaiveDate> {
    if path.extension()? != LOG_EXTENSION {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    NaiveDate::parse_from_str(stem, LOG_DATE_FORMAT).ok()
}
