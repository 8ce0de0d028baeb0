//! Error types for the syslock CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for syslock operations.
#[derive(Error, Debug)]
pub enum SyslockError {
    /// Malformed flags or option values. Reported to stderr, never logged.
    #[error("{0}")]
    Usage(String),

    /// Lock already exists and no retry window was requested.
    #[error("lock is held by another process{detail}\nLock: {path}")]
    LockHeld { path: String, detail: String },

    /// Lock could not be acquired within the allotted wait.
    #[error("timed out waiting for lock '{path}' after {seconds}s")]
    LockTimeout { path: String, seconds: u64 },

    /// Filesystem operation failed.
    #[error("IO error while {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// The system logger could not be invoked or reported failure.
    #[error("system logger failed: {0}")]
    Logger(String),
}

impl SyslockError {
    /// Create an I/O error with an operation description.
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        SyslockError::Io {
            operation: operation.into(),
            source,
        }
    }

    /// Returns the appropriate exit code for this error type.
    ///
    /// Every error maps to the generic failure code; callers decide whether
    /// to abort the enclosing script.
    pub fn exit_code(&self) -> i32 {
        exit_codes::FAILURE
    }
}

/// Result type alias for syslock operations.
pub type Result<T> = std::result::Result<T, SyslockError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_errors_exit_nonzero() {
        let errors = [
            SyslockError::Usage("bad flag".to_string()),
            SyslockError::LockHeld {
                path: "/tmp/x.lock".to_string(),
                detail: String::new(),
            },
            SyslockError::LockTimeout {
                path: "/tmp/x.lock".to_string(),
                seconds: 3,
            },
            SyslockError::Logger("spawn failed".to_string()),
        ];
        for err in errors {
            assert_eq!(err.exit_code(), exit_codes::FAILURE);
        }
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = SyslockError::LockTimeout {
            path: "/run/lock/job.lock".to_string(),
            seconds: 30,
        };
        assert_eq!(
            err.to_string(),
            "timed out waiting for lock '/run/lock/job.lock' after 30s"
        );

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = SyslockError::io("opening log file", io);
        assert!(err.to_string().contains("opening log file"));
    }
}
