//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use dig_core::{application::ports::Filesystem, error::DigResult};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> DigResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> DigResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> dig_core::error::DigError {
    use dig_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_dir_all_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let nested = tmp.path().join("a/b/c");

        fs.create_dir_all(&nested).unwrap();
        fs.create_dir_all(&nested).unwrap();
        assert!(fs.exists(&nested));
    }

    #[test]
    fn write_file_overwrites() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let path = tmp.path().join("out.js");

        fs.write_file(&path, "one").unwrap();
        fs.write_file(&path, "two").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "two");
    }

    #[test]
    fn write_into_missing_dir_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let path = tmp.path().join("missing").join("out.js");

        assert!(fs.write_file(&path, "x").is_err());
    }
}
