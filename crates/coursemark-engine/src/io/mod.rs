use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Course file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a course document fully into memory as UTF-8.
pub fn read_course(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write a generated artifact, creating parent directories as needed.
pub fn write_artifact(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }
    fs::write(path, content).map_err(IoError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_course_success() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("course.md");
        std::fs::write(&path, "# PHASE 1: Basics\n").unwrap();

        let content = read_course(&path).unwrap();
        assert_eq!(content, "# PHASE 1: Basics\n");
    }

    #[test]
    fn test_read_course_not_found() {
        let dir = TempDir::new().unwrap();
        let result = read_course(&dir.path().join("missing.md"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_write_artifact_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("nested").join("seed.sql");

        write_artifact(&path, "-- seed\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "-- seed\n");
    }

    #[test]
    fn test_write_artifact_overwrites_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("outline.json");
        std::fs::write(&path, "old").unwrap();

        write_artifact(&path, "new").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }
}
