//! Single-writer guard for generator runs.

use crate::error::{InsightsError, Result};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Exclusive lock file held while a run writes results.
///
/// Acquisition fails fast with [`InsightsError::RunInProgress`] if another
/// run already holds it. The file is removed on drop.
#[derive(Debug)]
pub struct RunLock {
    path: PathBuf,
}

/// `<db>.lock` next to the database file.
pub fn lock_path_for(db_path: &Path) -> PathBuf {
    let mut name = db_path.as_os_str().to_os_string();
    name.push(".lock");
    PathBuf::from(name)
}

impl RunLock {
    pub fn acquire(path: &Path) -> Result<Self> {
        let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(InsightsError::RunInProgress {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        writeln!(file, "{}", std::process::id())?;
        tracing::debug!(path = %path.display(), "acquired run lock");

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for RunLock {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to remove run lock");
        }
    }
}
