//! Exclusive lock on the data directory
//!
//! Every invocation loads the roster, runs one command and saves it again.
//! Holding this lock for the whole cycle keeps two processes from
//! interleaving and losing each other's writes.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use log::{debug, warn};

use crate::domain::result::{Error, Result};

/// Released when dropped
#[derive(Debug)]
pub struct RosterLock {
    file: File,
    path: PathBuf,
}

impl RosterLock {
    /// Take the lock without waiting; fails with [`Error::Locked`] if another
    /// handle already holds it.
    pub fn acquire(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(path)?;

        if let Err(e) = FileExt::try_lock_exclusive(&file) {
            if e.kind() == fs2::lock_contended_error().kind() {
                return Err(Error::Locked(path.display().to_string()));
            }
            return Err(e.into());
        }

        debug!("event=lock_acquired module=lock path={}", path.display());
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for RosterLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            warn!(
                "event=lock_release_failed module=lock path={} error={}",
                self.path.display(),
                e
            );
        }
    }
}
