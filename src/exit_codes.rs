//! Exit code constants for the syslock CLI.
//!
//! The surface is deliberately small:
//! - 0: Success
//! - 1: Any failure (usage error, lock contention/timeout, I/O)
//!
//! The `error` subcommand is the one exception: it exits with its parsed
//! (or defaulted) status code so scripts can propagate it.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Generic failure: bad arguments, lock unavailable, or I/O error.
pub const FAILURE: i32 = 1;
