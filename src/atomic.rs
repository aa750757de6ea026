//! Locked, atomic file replacement shared by the progress file and config

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use fs2::FileExt;

use crate::error::StoreError;

/// Replace `path` with `content`.
///
/// Holds an exclusive lock on `<path>.<ext>.lock` while the bytes go to
/// `<path>.<ext>.tmp`, which is synced and renamed over `path`. Readers see
/// either the old file or the new one, never a partial write.
pub fn replace_file(path: &Path, content: &[u8]) -> Result<(), StoreError> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default();

    // Separate lock file, so the rename cannot drop the lock
    let lock_path = path.with_extension(format!("{ext}.lock"));
    let lock = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)?;
    lock.lock_exclusive()
        .map_err(|e| StoreError::Lock(format!("{}: {}", lock_path.display(), e)))?;

    let temp_path = path.with_extension(format!("{ext}.tmp"));
    let mut temp = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)?;
    temp.write_all(content)?;
    temp.sync_all()?;

    std::fs::rename(&temp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_replace_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        replace_file(&path, b"{}").unwrap();
        replace_file(&path, b"{\"a\":\"1\"}").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\"a\":\"1\"}");
        assert!(!dir.path().join("data.json.tmp").exists());
        assert!(dir.path().join("data.json.lock").exists());
    }
}
