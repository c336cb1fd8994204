//! Exit code constants for the desksweep CLI.
//!
//! - 0: Success (including sweeps that recorded per-item failures)
//! - 1: User error (bad arguments, unresolvable home directory)
//! - 2: Configuration error (unreadable or invalid config file)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an environment we cannot work in.
pub const USER_ERROR: i32 = 1;

/// Configuration failure: the config file exists but cannot be used.
pub const CONFIG_ERROR: i32 = 2;
