//! Configuration types and defaults for desksweep.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A watched directory declared in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Name used for the directory in logs and reports (e.g., "Downloads").
    pub label: String,

    /// Directory to sweep. A leading `~/` is expanded to the home directory.
    pub path: PathBuf,
}

// Default value functions for serde
pub(crate) fn default_threshold_hours() -> u32 {
    crate::policy::DEFAULT_THRESHOLD_HOURS
}
pub(crate) fn default_retention_days() -> u32 {
    crate::events::DEFAULT_RETENTION_DAYS
}
pub(crate) fn default_true() -> bool {
    true
}
