//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for desksweep.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Sweep settings
    // =========================================================================
    /// Entries strictly older than this many hours are moved to the trash.
    #[serde(default = "default_threshold_hours")]
    pub threshold_hours: u32,

    /// Directories to sweep, in order. Empty means Downloads then Desktop.
    #[serde(default)]
    pub targets: Vec<TargetConfig>,

    /// Trash directory override. Unset uses the platform trash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trash_dir: Option<PathBuf>,

    // =========================================================================
    // Log settings
    // =========================================================================
    /// Directory for the per-day event logs (default: `~/.desksweep/logs`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,

    /// Day files older than this many days are deleted after each run.
    #[serde(default = "default_retention_days")]
    pub retention_days: u32,

    // =========================================================================
    // Notification settings
    // =========================================================================
    /// Whether to send a desktop notification after a real sweep.
    #[serde(default = "default_true")]
    pub notify: bool,

    /// Command used to send notifications (shell-words parsed; no shell).
    ///
    /// `{title}` and `{message}` in any argument are replaced before running.
    /// Unset uses `osascript` on macOS and `notify-send` elsewhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_command: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold_hours: default_threshold_hours(),
            targets: Vec::new(),
            trash_dir: None,
            log_dir: None,
            retention_days: default_retention_days(),
            notify: default_true(),
            notify_command: None,
        }
    }
}
