//! Scoped scratch space for intermediate artifacts.
//!
//! A [`WorkDir`] owns a private temporary directory. Components that need to
//! stage files receive a reference to it; the directory and everything in it
//! is removed when the handle is dropped, on success and error paths alike.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::{Error, Result};

/// An owned, self-cleaning scratch directory.
///
/// # Examples
///
/// ```
/// use paramtree::WorkDir;
///
/// let scratch = WorkDir::new().unwrap();
/// let staged = scratch.stage("merged.yml", "a: 1\n").unwrap();
/// assert!(staged.exists());
///
/// let root = scratch.path().to_path_buf();
/// drop(scratch);
/// assert!(!root.exists());
/// ```
#[derive(Debug)]
pub struct WorkDir {
    dir: TempDir,
}

impl WorkDir {
    /// Create a fresh scratch directory under the system temp location.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory cannot be created.
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new().prefix("paramtree-").tempdir()?;
        log::debug!("scratch directory: {}", dir.path().display());
        Ok(Self { dir })
    }

    /// Location of the scratch directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `name` inside the scratch directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] if the file cannot be written.
    pub fn stage(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Remove the scratch directory now, reporting any failure.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if removal fails.
    pub fn close(self) -> Result<()> {
        self.dir.close().map_err(Error::from)
    }
}
