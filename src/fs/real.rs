use super::FileSystem;
use anyhow::{bail, Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).context(format!("Failed to read file {:?}", path))
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        match fs::create_dir(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                if path.is_dir() {
                    Ok(())
                } else {
                    bail!("Path {:?} exists and is not a directory", path)
                }
            }
            Err(e) => Err(e).context(format!("Failed to create directory {:?}", path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        let base = dir.path();

        fs::create_dir(base.join("subdir")).unwrap();
        fs::write(base.join("test.txt"), "hello world").unwrap();

        dir
    }

    #[test]
    fn test_exists() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        assert!(fs.exists(temp.path()));
        assert!(fs.exists(&temp.path().join("test.txt")));
        assert!(!fs.exists(&temp.path().join("nonexistent")));
    }

    #[test]
    fn test_is_dir_and_is_file() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        assert!(fs.is_dir(&temp.path().join("subdir")));
        assert!(!fs.is_dir(&temp.path().join("test.txt")));
        assert!(fs.is_file(&temp.path().join("test.txt")));
        assert!(!fs.is_file(temp.path()));
    }

    #[test]
    fn test_read_to_string() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        let content = fs.read_to_string(&temp.path().join("test.txt")).unwrap();
        assert_eq!(content, "hello world");
        assert!(fs.read_to_string(&temp.path().join("missing.txt")).is_err());
    }

    #[test]
    fn test_create_dir() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        let target = temp.path().join("generated");
        fs.create_dir(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn test_create_dir_is_idempotent() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        let target = temp.path().join("subdir");
        fs.create_dir(&target).unwrap();
        fs.create_dir(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn test_create_dir_requires_parent() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        let target = temp.path().join("missing/generated");
        assert!(fs.create_dir(&target).is_err());
        assert!(!target.exists());
    }

    #[test]
    fn test_create_dir_over_file_fails() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        assert!(fs.create_dir(&temp.path().join("test.txt")).is_err());
    }
}
