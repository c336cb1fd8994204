//! Error types for the desksweep CLI.
//!
//! Only setup problems are errors at this level. Everything that can go wrong
//! during a sweep (unreadable directories, failed moves, log I/O) is absorbed
//! by the component that hit it.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for desksweep operations.
#[derive(Error, Debug)]
pub enum SweepError {
    /// The environment or the arguments do not allow a run.
    #[error("{0}")]
    UserError(String),

    /// The configuration file could not be read, parsed or validated.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl SweepError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SweepError::UserError(_) => exit_codes::USER_ERROR,
            SweepError::ConfigError(_) => exit_codes::CONFIG_ERROR,
        }
    }
}

/// Result type alias for desksweep operations.
pub type Result<T> = std::result::Result<T, SweepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = SweepError::UserError("no home directory".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn config_error_has_correct_exit_code() {
        let err = SweepError::ConfigError("bad yaml".to_string());
        assert_eq!(err.exit_code(), exit_codes::CONFIG_ERROR);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = SweepError::UserError("could not determine home directory".to_string());
        assert_eq!(err.to_string(), "could not determine home directory");

        let err = SweepError::ConfigError("threshold_hours must be greater than 0".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: threshold_hours must be greater than 0"
        );
    }
}
