//! Locking subsystem for syslock.
//!
//! A lock is a named advisory lock backed by a filesystem path: its
//! existence *is* the presence of the file on disk. No in-memory handle
//! persists it, and the lock deliberately survives the `lock` process
//! exiting so the calling script holds it until `unlock` (or another
//! process) deletes the path.
//!
//! # Lock Files
//!
//! Lock files default to `<lock-dir>/<program-name>.lock` and are created
//! using **create_new** semantics (exclusive create) so that only one
//! process can acquire a given lock at a time. Each lock file contains JSON
//! metadata (owner, pid, creation time) used purely for diagnostics.
//!
//! # Retry
//!
//! With a timeout of `n > 0` seconds, acquisition retries once per second
//! until success or the deadline passes. No backoff, no jitter, and no way
//! to abort an in-progress wait early.

pub mod backend;
pub mod metadata;


pub use backend::{FsBackend, LockBackend};
pub use metadata::LockMetadata;

use crate::config::Settings;
use crate::error::{Result, SyslockError};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Fixed interval between acquisition attempts.
pub const RETRY_INTERVAL: Duration = Duration::from_secs(1);

/// Resolve a lock path: positional argument, else `-l` flag, else the
/// default `<lock-dir>/<program-name>.lock`.
pub fn resolve_path(
    positional: Option<PathBuf>,
    flag: Option<PathBuf>,
    settings: &Settings,
) -> PathBuf {
    positional
        .or(flag)
        .unwrap_or_else(|| settings.default_lock_path())
}

/// Acquire the lock at `path`.
///
/// With no timeout (or 0), a single atomic create attempt: fails
/// immediately with [`SyslockError::LockHeld`] if the path already exists.
/// With a timeout of `n > 0` seconds, retries once per second and fails
/// with [`SyslockError::LockTimeout`] once the deadline passes.
pub fn acquire(backend: &dyn LockBackend, path: &Path, timeout: Option<u64>) -> Result<()> {
    acquire_with_interval(backend, path, timeout, RETRY_INTERVAL)
}

/// Acquisition loop with an injectable retry interval for tests.
fn acquire_with_interval(
    backend: &dyn LockBackend,
    path: &Path,
    timeout: Option<u64>,
    interval: Duration,
) -> Result<()> {
    if backend.try_create(path, &LockMetadata::new())? {
        return Ok(());
    }

    let seconds = timeout.unwrap_or(0);
    if seconds == 0 {
        return Err(held_error(path));
    }

    let deadline = Instant::now() + Duration::from_secs(seconds);
    while Instant::now() < deadline {
        std::thread::sleep(interval);
        if backend.try_create(path, &LockMetadata::new())? {
            return Ok(());
        }
    }

    Err(SyslockError::LockTimeout {
        path: path.display().to_string(),
        seconds,
    })
}

/// Release the lock at `path`.
///
/// Unconditionally deletes the path; absence is success (idempotent).
/// No ownership check: scripts may rely on one process releasing a lock
/// acquired by another (e.g., supervisor cleanup).
pub fn release(backend: &dyn LockBackend, path: &Path) -> Result<()> {
    backend.remove(path)
}

/// Build a "lock held" error, enriched with the holder's metadata when the
/// existing lock file is readable.
fn held_error(path: &Path) -> SyslockError {
    let detail = match LockMetadata::from_file(path) {
        Ok(meta) => format!(" (created {} ago by {})", meta.age_string(), meta.owner),
        Err(_) => String::new(),
    };
    SyslockError::LockHeld {
        path: path.display().to_string(),
        detail,
    }
}
