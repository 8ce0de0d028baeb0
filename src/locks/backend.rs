//! Lock backends: the atomic create-if-absent primitive.
//!
//! Mutual exclusion rests entirely on the creation step being a single
//! atomic filesystem operation across concurrent processes, never a
//! check-then-create. The [`LockBackend`] trait isolates that primitive so
//! the retry logic in the parent module can be exercised deterministically
//! against an in-memory fake.

use crate::error::{Result, SyslockError};
use crate::locks::metadata::LockMetadata;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// The atomic lock-file primitive.
pub trait LockBackend {
    /// Attempt a single atomic create-if-absent of the lock path.
    ///
    /// Returns `Ok(true)` if the lock was created, `Ok(false)` if the path
    /// already exists, and an error only for real I/O failures. A failed
    /// attempt must leave no file behind.
    fn try_create(&self, path: &Path, metadata: &LockMetadata) -> Result<bool>;

    /// Delete the lock path. Absence is success (idempotent).
    fn remove(&self, path: &Path) -> Result<()>;
}

/// Production backend: exclusive file creation (`create_new`).
#[derive(Debug, Default)]
pub struct FsBackend;

impl LockBackend for FsBackend {
    fn try_create(&self, path: &Path, metadata: &LockMetadata) -> Result<bool> {
        // Ensure the lock directory exists
        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| {
                SyslockError::io(
                    format!("creating lock directory '{}'", parent.display()),
                    e,
                )
            })?;
        }

        // Try to create the lock file exclusively
        let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => {
                return Err(SyslockError::io(
                    format!("creating lock file '{}'", path.display()),
                    e,
                ));
            }
        };

        // Write the metadata; clean up the half-made lock on failure so an
        // unsuccessful acquire leaves no file.
        let write_result = file
            .write_all(metadata.to_json().as_bytes())
            .and_then(|()| file.sync_all());
        if let Err(e) = write_result {
            let _ = fs::remove_file(path);
            return Err(SyslockError::io(
                format!("writing lock metadata to '{}'", path.display()),
                e,
            ));
        }

        Ok(true)
    }

    fn remove(&self, path: &Path) -> Result<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SyslockError::io(
                format!("removing lock file '{}'", path.display()),
                e,
            )),
        }
    }
}

/// In-memory backend for deterministic tests: no real filesystem races.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryBackend {
    held: std::sync::Mutex<std::collections::HashSet<std::path::PathBuf>>,
}

#[cfg(test)]
impl MemoryBackend {
    /// Whether a lock is currently held at `path`.
    pub fn is_held(&self, path: &Path) -> bool {
        self.held.lock().unwrap().contains(path)
    }
}

#[cfg(test)]
impl LockBackend for MemoryBackend {
    fn try_create(&self, path: &Path, _metadata: &LockMetadata) -> Result<bool> {
        Ok(self.held.lock().unwrap().insert(path.to_path_buf()))
    }

    fn remove(&self, path: &Path) -> Result<()> {
        self.held.lock().unwrap().remove(path);
        Ok(())
    }
}
