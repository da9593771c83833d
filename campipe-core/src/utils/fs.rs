//! Filesystem utilities.

use crate::error::CoreError;
use std::fs;
use std::path::Path;

/// Ensures that a directory exists at `path`, creating it and any missing
/// parents.
///
/// # Errors
///
/// Returns [`CoreError::Filesystem`] if the path exists but is not a
/// directory, or if creation fails.
///
/// ```
/// use campipe_core::utils::fs::ensure_dir_exists;
///
/// let temp_dir = tempfile::tempdir().unwrap();
/// let dir_path = temp_dir.path().join("captures/raw");
/// ensure_dir_exists(&dir_path).unwrap();
/// assert!(dir_path.is_dir());
/// ```
pub fn ensure_dir_exists(path: &Path) -> Result<(), CoreError> {
    if path.exists() {
        if path.is_dir() {
            return Ok(());
        }
        return Err(CoreError::Filesystem {
            message: "Path exists but is not a directory".to_string(),
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "Path exists but is not a directory",
            ),
        });
    }

    fs::create_dir_all(path).map_err(|e| CoreError::Filesystem {
        message: "Failed to create directory".to_string(),
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_ensure_dir_exists_creates_nested_directories() {
        let temp_root = tempdir().expect("Failed to create temp root dir for test");
        let nested_dir_path = temp_root.path().join("parent_dir/child_dir");

        assert!(!nested_dir_path.exists());
        let result = ensure_dir_exists(&nested_dir_path);
        assert!(result.is_ok(), "ensure_dir_exists failed for nested: {:?}", result.err());
        assert!(nested_dir_path.is_dir(), "Nested directory was not created");
    }

    #[test]
    fn test_ensure_dir_exists_succeeds_if_directory_already_exists() {
        let temp_root = tempdir().expect("Failed to create temp root dir for test");
        assert!(ensure_dir_exists(temp_root.path()).is_ok());
    }

    #[test]
    fn test_ensure_dir_exists_fails_if_path_is_a_file() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file for test");

        match ensure_dir_exists(temp_file.path()) {
            Err(CoreError::Filesystem { path, source, .. }) => {
                assert_eq!(path, temp_file.path());
                assert_eq!(source.kind(), std::io::ErrorKind::AlreadyExists);
            }
            other => panic!("Expected CoreError::Filesystem, got {:?}", other),
        }
    }
}
