//! Lock file metadata.
//!
//! Each lock file contains JSON metadata describing the holder:
//! - `owner`: `user@HOST`
//! - `pid`: the locking process id (optional)
//! - `created_at`: RFC3339 timestamp
//!
//! The metadata is diagnostic only. The lock itself is the presence of the
//! file on disk, and `unlock` never checks ownership before deleting.

use crate::error::{Result, SyslockError};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Metadata stored in lock files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockMetadata {
    /// Owner of the lock (e.g., `user@HOST`).
    pub owner: String,

    /// Process ID of the lock holder (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<u32>,

    /// Timestamp when the lock was created (RFC3339).
    pub created_at: DateTime<Utc>,
}

impl LockMetadata {
    /// Create new lock metadata for the current process.
    pub fn new() -> Self {
        Self {
            owner: get_owner_string(),
            pid: Some(std::process::id()),
            created_at: Utc::now(),
        }
    }

    /// Parse lock metadata from an existing lock file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            SyslockError::io(
                format!("reading lock file '{}'", path.as_ref().display()),
                e,
            )
        })?;

        serde_json::from_str(&content).map_err(|e| {
            SyslockError::io(
                format!("parsing lock file '{}'", path.as_ref().display()),
                std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            )
        })
    }

    /// Serialize lock metadata to a JSON string.
    pub fn to_json(&self) -> String {
        // Serialization of these plain fields cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Calculate the age of the lock.
    pub fn age(&self) -> Duration {
        Utc::now().signed_duration_since(self.created_at)
    }

    /// Format the age as a human-readable string.
    pub fn age_string(&self) -> String {
        let age = self.age();
        let minutes = age.num_minutes();
        let hours = age.num_hours();
        let days = age.num_days();

        if days > 0 {
            format!("{}d {}h", days, hours % 24)
        } else if hours > 0 {
            format!("{}h {}m", hours, minutes % 60)
        } else {
            format!("{}m", minutes)
        }
    }
}

impl Default for LockMetadata {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the owner string for lock metadata.
fn get_owner_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}
