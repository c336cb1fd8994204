//! Environment resolution for desksweep.
//!
//! This module turns the user's home directory, the loaded [`Config`] and any
//! command-line overrides into the absolute paths a run needs: the watched
//! directories, the trash and the log directory.
//!
//! All commands must use this module to locate paths, so that config values
//! and defaults are applied in exactly one place.

use crate::config::Config;
use crate::error::{Result, SweepError};
use crate::sweep::SweepTarget;
use crate::trash::HomeTrash;
use std::path::{Path, PathBuf};

/// Application directory under the home directory.
pub const APP_DIR: &str = ".desksweep";

/// Config file name inside [`APP_DIR`].
pub const CONFIG_FILE: &str = "config.yaml";

/// Log directory name inside [`APP_DIR`].
pub const LOGS_DIR: &str = "logs";

/// Resolved paths and settings for one desksweep run.
///
/// All paths are absolute when the home directory is absolute.
#[derive(Debug, Clone)]
pub struct SweepContext {
    /// The user's home directory.
    pub home: PathBuf,

    /// Config the paths were resolved from.
    pub config: Config,

    /// Watched directories, in sweep order.
    pub targets: Vec<SweepTarget>,

    /// Trash entries are moved into.
    pub trash: HomeTrash,

    /// Directory holding the per-day event logs.
    pub log_dir: PathBuf,
}

impl SweepContext {
    /// Resolve the context for the current user.
    ///
    /// Loads the config from `config_path` or `~/.desksweep/config.yaml`.
    ///
    /// # Returns
    ///
    /// * `Ok(SweepContext)` - Successfully resolved context
    /// * `Err(SweepError::UserError)` - If the home directory cannot be determined
    /// * `Err(SweepError::ConfigError)` - If the config file is unreadable or invalid
    pub fn resolve(config_path: Option<&Path>) -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            SweepError::UserError("could not determine the home directory".to_string())
        })?;

        let config_path = match config_path {
            Some(path) => expand_tilde(path, &home),
            None => default_config_path(&home),
        };
        let config = Config::load_or_default(&config_path)?;

        let data_dir = dirs::data_dir().unwrap_or_else(|| home.join(".local").join("share"));
        let default_targets = vec![
            SweepTarget::new(
                "Downloads",
                dirs::download_dir().unwrap_or_else(|| home.join("Downloads")),
            ),
            SweepTarget::new(
                "Desktop",
                dirs::desktop_dir().unwrap_or_else(|| home.join("Desktop")),
            ),
        ];

        Ok(Self::from_parts(home, config, &data_dir, default_targets))
    }

    /// Build a context from explicit parts.
    ///
    /// `default_targets` are used when the config declares no targets.
    pub fn from_parts(
        home: PathBuf,
        config: Config,
        data_dir: &Path,
        default_targets: Vec<SweepTarget>,
    ) -> Self {
        let targets = if config.targets.is_empty() {
            default_targets
        } else {
            config
                .targets
                .iter()
                .map(|t| SweepTarget::new(t.label.clone(), expand_tilde(&t.path, &home)))
                .collect()
        };

        let trash = match &config.trash_dir {
            Some(dir) => HomeTrash::freedesktop(expand_tilde(dir, &home)),
            None => HomeTrash::platform_default(&home, data_dir),
        };

        let log_dir = match &config.log_dir {
            Some(dir) => expand_tilde(dir, &home),
            None => home.join(APP_DIR).join(LOGS_DIR),
        };

        Self {
            home,
            config,
            targets,
            trash,
            log_dir,
        }
    }

    /// Apply a threshold override from the command line.
    pub fn with_threshold_hours(mut self, threshold_hours: Option<u32>) -> Result<Self> {
        if let Some(hours) = threshold_hours {
            if hours == 0 {
                return Err(SweepError::UserError(
                    "--threshold-hours must be greater than 0".to_string(),
                ));
            }
            self.config.threshold_hours = hours;
        }
        Ok(self)
    }
}

/// Path of the default config file under `home`.
pub fn default_config_path(home: &Path) -> PathBuf {
    home.join(APP_DIR).join(CONFIG_FILE)
}

/// Expand a leading `~` or `~/` in `path` to `home`.
pub fn expand_tilde(path: &Path, home: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) if rest.as_os_str().is_empty() => home.to_path_buf(),
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}
