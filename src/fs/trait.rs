//! FileSystem trait definition

use anyhow::Result;
use std::path::Path;

/// Type of file system entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    File,
    Directory,
}

/// The handful of file system operations path resolution needs
pub trait FileSystem: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if path is a file
    fn is_file(&self, path: &Path) -> bool;

    /// Read file contents as string
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Create a single directory level.
    ///
    /// The parent must already exist. An already existing directory is not an
    /// error, so concurrent callers racing on the same path all succeed.
    fn create_dir(&self, path: &Path) -> Result<()>;
}
