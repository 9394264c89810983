//! Atomic file replacement
//!
//! Writes go to a sibling temp file which is then renamed over the target,
//! so readers see either the old document or the new one.

use crate::errors::{io_error, Result};
use std::fs;
use std::path::{Path, PathBuf};

fn temp_path_for(target_path: &Path) -> PathBuf {
    let mut name = target_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    target_path.with_file_name(name)
}

/// Atomically replace `target_path` with `content`
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| io_error("create_directory_dir", e))?;
        }
    }

    let temp_path = temp_path_for(target_path);
    fs::write(&temp_path, content).map_err(|e| io_error("write_directory_temp", e))?;

    if let Err(e) = fs::rename(&temp_path, target_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_error("rename_directory_temp", e));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_replaces_content() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("plans.json");

        atomic_write(&target, b"{\"a\":1}").unwrap();
        atomic_write(&target, b"{\"a\":2}").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"{\"a\":2}");
    }

    #[test]
    fn test_atomic_write_creates_parent() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("state").join("plans.json");

        atomic_write(&target, b"[]").unwrap();

        assert!(target.exists());
    }

    #[test]
    fn test_temp_file_does_not_linger() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("plans.json");

        atomic_write(&target, b"[]").unwrap();

        let leftovers = fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn test_temp_path_keeps_extension() {
        let temp = temp_path_for(Path::new("/x/plans.json"));
        assert_eq!(temp, PathBuf::from("/x/plans.json.tmp"));
    }
}
