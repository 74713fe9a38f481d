//! Temp-file writer: a fetch lands in `<dest>.part` and is renamed into place
//! only after the whole body arrived with a success status.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
#[cfg(unix)]
use std::os::unix::fs::FileExt;

/// Writer for an in-progress download. Cloneable so the transfer callback can
/// hold one handle while the caller keeps another for finalize/discard.
#[derive(Clone)]
pub struct StorageWriter {
    file: Arc<File>,
    temp_path: PathBuf,
}

/// Temp path used while `dest` is being downloaded.
pub fn temp_path_for(dest: &Path) -> PathBuf {
    let mut name = dest.as_os_str().to_os_string();
    name.push(".part");
    PathBuf::from(name)
}

impl StorageWriter {
    /// Create the temp file for `dest`, truncating any stale leftover.
    /// The destination's parent directory must already exist.
    pub fn create(dest: &Path) -> Result<Self> {
        let temp_path = temp_path_for(dest);
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("failed to create temp file: {}", temp_path.display()))?;
        Ok(StorageWriter {
            file: Arc::new(file),
            temp_path,
        })
    }

    /// Write `data` at `offset` without moving the file's logical cursor.
    #[cfg(unix)]
    pub fn write_at(&self, offset: u64, data: &[u8]) -> Result<()> {
        let n = self
            .file
            .write_at(data, offset)
            .context("temp file write failed")?;
        if n != data.len() {
            anyhow::bail!("short write: {} of {}", n, data.len());
        }
        Ok(())
    }

    /// Non-Unix fallback: seek + write on a cloned handle.
    #[cfg(not(unix))]
    pub fn write_at(&self, offset: u64, data: &[u8]) -> Result<()> {
        use std::io::{Seek, SeekFrom, Write};
        let mut f = (*self.file).try_clone()?;
        f.seek(SeekFrom::Start(offset))?;
        f.write_all(data)?;
        Ok(())
    }

    /// Sync file data to disk. Call before `finalize` for durability.
    pub fn sync(&self) -> Result<()> {
        self.file.sync_all().context("temp file sync failed")?;
        Ok(())
    }

    /// Atomically rename the temp file onto `dest`, replacing any previous
    /// copy. Consumes the writer and closes the file.
    pub fn finalize(self, dest: &Path) -> Result<()> {
        let temp_path = self.temp_path.clone();
        drop(self.file);

        std::fs::rename(&temp_path, dest).with_context(|| {
            format!(
                "failed to rename {} to {}",
                temp_path.display(),
                dest.display()
            )
        })?;
        Ok(())
    }

    /// Remove the temp file after a failed fetch so nothing half-written is
    /// left next to valid cached data. Best-effort.
    pub fn discard(self) {
        let temp_path = self.temp_path.clone();
        drop(self.file);

        if let Err(err) = std::fs::remove_file(&temp_path) {
            tracing::debug!(
                path = %temp_path.display(),
                "failed to remove temp file: {err}"
            );
        }
    }
}
