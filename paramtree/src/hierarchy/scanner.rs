//! Repository traversal and document classification.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::hierarchy::types::{Document, Environment};

/// Base name of global-level documents.
pub const GLOBAL_BASE: &str = "global";

/// Base name of datacenter-level documents.
pub const DATACENTER_BASE: &str = "datacenter";

/// Walks a repository root and classifies every parameter document.
///
/// # Examples
///
/// ```no_run
/// use paramtree::HierarchyScanner;
/// use std::path::Path;
///
/// let scanner = HierarchyScanner::new(Path::new("/srv/params"), vec!["yml".into()]).unwrap();
/// for doc in scanner.scan().unwrap() {
///     println!("{} {}", doc.level(), doc.descriptor());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct HierarchyScanner {
    root: PathBuf,
    extensions: Vec<String>,
}

impl HierarchyScanner {
    /// Create a scanner for `root`, recognizing documents with the given
    /// extensions (in priority order).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRepoPath`] if `root` does not exist or is not
    /// a directory. No scanning happens in that case.
    pub fn new(root: &Path, extensions: Vec<String>) -> Result<Self> {
        validate_repo_root(root)?;
        Ok(Self {
            root: root.to_path_buf(),
            extensions,
        })
    }

    /// Repository root being scanned.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Produce the ordered catalog: global documents first, then each
    /// datacenter (sorted by name) with its datacenter-level documents
    /// followed by its foundation documents (sorted by name).
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a directory cannot be listed.
    pub fn scan(&self) -> Result<Vec<Document>> {
        let mut catalog = Vec::new();

        for (path, environment) in self.variant_files(&self.root, GLOBAL_BASE) {
            catalog.push(Document::global(path, environment));
        }

        for (datacenter, dir) in self.datacenter_dirs()? {
            let before = catalog.len();

            for (path, environment) in self.variant_files(&dir, DATACENTER_BASE) {
                catalog.push(Document::datacenter(path, datacenter.clone(), environment));
            }

            for (foundation, path) in self.foundation_files(&dir)? {
                catalog.push(Document::foundation(path, datacenter.clone(), foundation));
            }

            log::debug!(
                "datacenter {datacenter}: {} document(s)",
                catalog.len() - before
            );
        }

        Ok(catalog)
    }

    /// Locate `<dir>/<base>[-<env>].<ext>` using the first extension that
    /// exists on disk.
    #[must_use]
    pub fn locate(
        &self,
        dir: &Path,
        base: &str,
        environment: Option<Environment>,
    ) -> Option<PathBuf> {
        let stem = match environment {
            Some(env) => format!("{base}-{env}"),
            None => base.to_string(),
        };
        self.extensions
            .iter()
            .map(|ext| dir.join(format!("{stem}.{ext}")))
            .find(|candidate| candidate.is_file())
    }

    /// The base file and each environment variant of `base` in `dir`.
    fn variant_files(&self, dir: &Path, base: &str) -> Vec<(PathBuf, Option<Environment>)> {
        std::iter::once(None)
            .chain(Environment::ALL.into_iter().map(Some))
            .filter_map(|env| self.locate(dir, base, env).map(|path| (path, env)))
            .collect()
    }

    /// Immediate, non-hidden subdirectories of the root, sorted by name.
    fn datacenter_dirs(&self) -> Result<Vec<(String, PathBuf)>> {
        let mut dirs = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if !path.is_dir() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                log::warn!("skipping non-UTF8 directory name: {}", path.display());
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            dirs.push((name.to_string(), path));
        }
        dirs.sort();
        Ok(dirs)
    }

    /// Foundation documents in a datacenter directory, keyed by stem.
    ///
    /// Anything whose name starts with `datacenter` is reserved for the
    /// datacenter level and never treated as a foundation. When one stem
    /// exists with several extensions, the highest-priority one wins.
    fn foundation_files(&self, dir: &Path) -> Result<BTreeMap<String, PathBuf>> {
        let mut found: BTreeMap<String, (usize, PathBuf)> = BTreeMap::new();

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let Some((stem, rank)) = self.classify_foundation(&path) else {
                continue;
            };
            match found.get(&stem) {
                Some((existing, _)) if *existing <= rank => {
                    log::warn!("ignoring {}: shadowed by another extension", path.display());
                }
                _ => {
                    found.insert(stem, (rank, path));
                }
            }
        }

        Ok(found
            .into_iter()
            .map(|(stem, (_, path))| (stem, path))
            .collect())
    }

    /// Returns the foundation name and extension rank for a candidate file.
    fn classify_foundation(&self, path: &Path) -> Option<(String, usize)> {
        let file_name = path.file_name()?.to_str()?;
        if file_name.starts_with('.') || file_name.starts_with(DATACENTER_BASE) {
            return None;
        }
        let (stem, ext) = file_name.rsplit_once('.')?;
        if stem.is_empty() {
            return None;
        }
        let rank = self.extensions.iter().position(|known| known == ext)?;
        Some((stem.to_string(), rank))
    }
}

/// Reject a repository root that does not exist or is not a directory.
///
/// # Errors
///
/// Returns [`Error::InvalidRepoPath`] describing the problem.
pub fn validate_repo_root(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(Error::InvalidRepoPath {
            path: root.to_path_buf(),
            reason: "does not exist".to_string(),
        });
    }
    if !root.is_dir() {
        return Err(Error::InvalidRepoPath {
            path: root.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }
    Ok(())
}
