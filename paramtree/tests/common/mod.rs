//! Shared fixtures for library integration tests.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A temporary parameter repository.
pub struct Repo {
    dir: TempDir,
}

#[allow(dead_code)]
impl Repo {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp repo"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, contents: &str) -> &Self {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        fs::write(path, contents).expect("failed to write fixture");
        self
    }

    pub fn mkdir(&self, relative: &str) -> &Self {
        fs::create_dir_all(self.dir.path().join(relative)).expect("failed to create dir");
        self
    }
}
