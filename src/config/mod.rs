//! Configuration model for desksweep.
//!
//! This module defines the Config struct that represents
//! `~/.desksweep/config.yaml`. It supports forward-compatible YAML parsing
//! (unknown fields are ignored), sensible defaults for optional fields, and
//! validation of config values. A missing config file means all defaults.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
pub use types::TargetConfig;
