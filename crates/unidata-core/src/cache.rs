//! Cache directory reset: wipe a target directory, or create it if absent.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Ensures `dir` exists and contains zero entries.
///
/// Every existing entry is removed, files and subdirectories alike; a missing
/// directory is created together with its parents. Deletion is irreversible,
/// so callers must only point this at directories holding regenerable cached
/// data. Filesystem errors propagate; nothing is retried.
pub fn reset_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        return Ok(());
    }

    let entries = fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
        let path = entry.path();
        // Symlinks report as non-dir here, so a link to a directory is
        // unlinked rather than followed.
        let file_type = entry
            .file_type()
            .with_context(|| format!("failed to stat {}", path.display()))?;
        if file_type.is_dir() {
            fs::remove_dir_all(&path)
                .with_context(|| format!("failed to remove {}", path.display()))?;
        } else {
            fs::remove_file(&path)
                .with_context(|| format!("failed to remove {}", path.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_missing_directory_with_parents() {
        let root = tempdir().unwrap();
        let dir = root.path().join("a/b/c");
        reset_dir(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
    }

    #[test]
    fn removes_files_and_subdirectories() {
        let root = tempdir().unwrap();
        let dir = root.path().join("cache");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("stale.txt"), b"old").unwrap();
        fs::create_dir_all(dir.join("sub/deeper")).unwrap();
        fs::write(dir.join("sub/deeper/nested.txt"), b"old").unwrap();

        reset_dir(&dir).unwrap();

        assert!(dir.is_dir());
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
    }

    #[test]
    fn empty_directory_is_a_no_op() {
        let root = tempdir().unwrap();
        let dir = root.path().join("cache");
        fs::create_dir(&dir).unwrap();
        reset_dir(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
    }
}
