//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{Result, SweepError};
use std::io;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(SweepError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SweepError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::metadata(path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            _ => Self::load(path),
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| SweepError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `threshold_hours` must be positive
    /// - target labels must be non-empty and unique
    /// - target paths must be non-empty
    /// - `notify_command`, when set, must parse and name a program
    pub fn validate(&self) -> Result<()> {
        if self.threshold_hours == 0 {
            return Err(SweepError::ConfigError(
                "threshold_hours must be greater than 0".to_string(),
            ));
        }

        for (i, target) in self.targets.iter().enumerate() {
            if target.label.trim().is_empty() {
                return Err(SweepError::ConfigError(format!(
                    "targets[{}]: label must be non-empty",
                    i
                )));
            }
            if target.path.as_os_str().is_empty() {
                return Err(SweepError::ConfigError(format!(
                    "targets[{}] ('{}'): path must be non-empty",
                    i, target.label
                )));
            }
            if self.targets[..i].iter().any(|t| t.label == target.label) {
                return Err(SweepError::ConfigError(format!(
                    "duplicate target label '{}'",
                    target.label
                )));
            }
        }

        if let Some(command) = &self.notify_command {
            let args = shell_words::split(command).map_err(|e| {
                SweepError::ConfigError(format!(
                    "failed to parse notify_command '{}': {}",
                    command, e
                ))
            })?;
            if args.is_empty() {
                return Err(SweepError::ConfigError(
                    "notify_command is empty after parsing".to_string(),
                ));
            }
        }

        Ok(())
    }
}
