//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `dig-adapters` crate provides implementations.

use std::path::Path;

use crate::error::DigResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `dig_adapters::filesystem::LocalFilesystem` (production)
/// - `dig_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Idempotent.
    fn create_dir_all(&self, path: &Path) -> DigResult<()>;

    /// Write content to a file, overwriting any existing file.
    fn write_file(&self, path: &Path, content: &str) -> DigResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for wall-clock time.
///
/// Migration filenames embed a creation timestamp; injecting the clock keeps
/// filename generation deterministic in tests.
///
/// Implemented by:
/// - `dig_adapters::clock::SystemClock` (production)
/// - `dig_adapters::clock::FixedClock` (testing)
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn epoch_millis(&self) -> u64;
}
