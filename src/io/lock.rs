//! Lock file management for single-instance enforcement.
//!
//! The daemon holds an exclusive `flock` on `$XDG_RUNTIME_DIR/duskswitch.lock`
//! (`/tmp` when the runtime directory is unset) and writes its PID into it. The kernel
//! drops the lock when the process dies, so a leftover file from a crash is simply
//! locked again by the next daemon.

use anyhow::{Context, Result};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::{Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::common::constants::{APP_NAME, LOCK_FILE_NAME};
use crate::common::utils::private_path;

/// Default lock file location.
pub fn get_lock_path() -> PathBuf {
    let runtime_dir = std::env::var("XDG_RUNTIME_DIR").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(runtime_dir).join(LOCK_FILE_NAME)
}

/// An acquired single-instance lock. Released by [`InstanceLock::release`].
#[derive(Debug)]
pub struct InstanceLock {
    file: File,
    path: PathBuf,
}

impl InstanceLock {
    /// Take the exclusive lock at `path`, or fail naming the PID that holds it.
    pub fn acquire(path: &Path) -> Result<Self> {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .with_context(|| format!("Failed to open lock file {}", private_path(path)))?;

        if file.try_lock_exclusive().is_err() {
            let holder = fs::read_to_string(path)
                .ok()
                .and_then(|content| content.lines().next().map(str::trim).map(String::from))
                .filter(|pid| !pid.is_empty())
                .unwrap_or_else(|| "unknown".to_string());
            anyhow::bail!("{APP_NAME} is already running (PID: {holder})");
        }

        file.set_len(0)?;
        file.seek(SeekFrom::Start(0))?;
        writeln!(&file, "{}", std::process::id())?;
        file.flush()?;

        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Unlock and remove the lock file.
    pub fn release(self) -> Result<()> {
        // Remove first so a racing daemon cannot lock the file we are about to delete.
        let removed = fs::remove_file(&self.path)
            .with_context(|| format!("Failed to remove lock file {}", private_path(&self.path)));
        let _ = FileExt::unlock(&self.file);
        removed
    }
}
