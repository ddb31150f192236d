// ABOUTME: Utility functions for the reveal-slides library
// ABOUTME: Path validation and all-or-nothing file replacement

use crate::errors::{DeckError, Result};
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

/// Validate that a directory exists
pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(DeckError::PathNotFoundError(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(DeckError::ValidationError(format!(
            "Path is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Sibling path used to stage a write before it replaces `path`.
fn staging_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.{}.tmp", file_name, uuid::Uuid::new_v4()))
}

/// Write `contents` to a staging file and rename it over `path`, so readers
/// see either the previous file or the complete new one.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let staging = staging_path(path);

    if let Err(e) = fs::write(&staging, contents) {
        let _ = fs::remove_file(&staging);
        return Err(DeckError::FileWriteError(e));
    }

    if let Err(e) = fs::rename(&staging, path) {
        if let Err(cleanup) = fs::remove_file(&staging) {
            warn!("Failed to clean up staging file {:?}: {}", staging, cleanup);
        }
        return Err(DeckError::FileWriteError(e));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_replaces_contents() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let target = dir.path().join("index.html");
        fs::write(&target, "old").unwrap();

        write_atomic(&target, "new").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1, "staging file should be renamed away");
    }

    #[test]
    fn test_validate_directory_exists() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        assert!(validate_directory_exists(dir.path()).is_ok());

        let missing = dir.path().join("missing");
        assert!(matches!(
            validate_directory_exists(&missing),
            Err(DeckError::PathNotFoundError(_))
        ));

        let file = dir.path().join("file.txt");
        fs::write(&file, "x").unwrap();
        assert!(matches!(
            validate_directory_exists(&file),
            Err(DeckError::ValidationError(_))
        ));
    }
}
