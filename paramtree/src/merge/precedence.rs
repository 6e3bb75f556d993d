//! Target resolution and ordered merging of the applicable documents.

use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};
use crate::hierarchy::{Document, Environment, HierarchyScanner, DATACENTER_BASE, GLOBAL_BASE};
use crate::merge::deep::{deep_merge, sort_keys};

/// A (datacenter, foundation, environment) combination to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeTarget {
    /// Datacenter directory name.
    pub datacenter: String,
    /// Foundation file stem.
    pub foundation: String,
    /// Environment variant applied at the global and datacenter levels.
    pub environment: Environment,
}

impl MergeTarget {
    /// Create a target, rejecting identifiers that could escape the
    /// repository (empty, `.`/`..`, or containing a path separator).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for an unusable identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramtree::{Environment, MergeTarget};
    ///
    /// assert!(MergeTarget::new("dc1", "f1", Environment::Prod).is_ok());
    /// assert!(MergeTarget::new("../dc1", "f1", Environment::Prod).is_err());
    /// ```
    pub fn new(
        datacenter: impl Into<String>,
        foundation: impl Into<String>,
        environment: Environment,
    ) -> Result<Self> {
        let datacenter = datacenter.into();
        let foundation = foundation.into();
        validate_identifier("datacenter", &datacenter)?;
        validate_identifier("foundation", &foundation)?;
        if foundation.starts_with(DATACENTER_BASE) {
            return Err(Error::Validation {
                field: "foundation".to_string(),
                message: format!("'{foundation}' names a datacenter file, not a foundation"),
            });
        }
        Ok(Self {
            datacenter,
            foundation,
            environment,
        })
    }
}

fn validate_identifier(field: &str, value: &str) -> Result<()> {
    let invalid = value.is_empty()
        || value == "."
        || value == ".."
        || value.contains('/')
        || value.contains('\\');
    if invalid {
        return Err(Error::Validation {
            field: field.to_string(),
            message: format!("'{value}' is not a valid {field} name"),
        });
    }
    Ok(())
}

/// The fully resolved parameter set for one target.
#[derive(Debug, Clone)]
pub struct MergedDocument {
    target: MergeTarget,
    sources: Vec<Document>,
    value: Value,
}

impl MergedDocument {
    /// Target this document was resolved for.
    #[must_use]
    pub fn target(&self) -> &MergeTarget {
        &self.target
    }

    /// Contributing documents, lowest precedence first.
    #[must_use]
    pub fn sources(&self) -> &[Document] {
        &self.sources
    }

    /// Merged value with keys sorted at every level.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// Selects the documents that apply to a target and merges them with strict
/// override precedence.
///
/// From lowest to highest precedence:
///
/// 1. `global.yml`
/// 2. `global-<env>.yml`
/// 3. `<dc>/datacenter.yml`
/// 4. `<dc>/datacenter-<env>.yml`
/// 5. `<dc>/<foundation>.yml`
///
/// # Examples
///
/// ```no_run
/// use paramtree::{Environment, HierarchyScanner, MergeTarget, PrecedenceMerger};
/// use std::path::Path;
///
/// let scanner = HierarchyScanner::new(Path::new("/srv/params"), vec!["yml".into()]).unwrap();
/// let merger = PrecedenceMerger::new(&scanner);
/// let target = MergeTarget::new("dc1", "foundation1", Environment::Prod).unwrap();
/// let merged = merger.merge(&target).unwrap();
/// println!("{} source(s)", merged.sources().len());
/// ```
pub struct PrecedenceMerger<'a> {
    scanner: &'a HierarchyScanner,
}

impl<'a> PrecedenceMerger<'a> {
    /// Create a merger over the repository the scanner points at.
    #[must_use]
    pub fn new(scanner: &'a HierarchyScanner) -> Self {
        Self { scanner }
    }

    /// Existing contributing documents for `target`, lowest precedence first.
    #[must_use]
    pub fn sources(&self, target: &MergeTarget) -> Vec<Document> {
        let root = self.scanner.root();
        let dc_dir = root.join(&target.datacenter);
        let env = Some(target.environment);
        let mut sources = Vec::with_capacity(5);

        for variant in [None, env] {
            if let Some(path) = self.scanner.locate(root, GLOBAL_BASE, variant) {
                sources.push(Document::global(path, variant));
            }
        }

        if dc_dir.is_dir() {
            for variant in [None, env] {
                if let Some(path) = self.scanner.locate(&dc_dir, DATACENTER_BASE, variant) {
                    sources.push(Document::datacenter(path, &target.datacenter, variant));
                }
            }
            if let Some(path) = self.scanner.locate(&dc_dir, &target.foundation, None) {
                sources.push(Document::foundation(
                    path,
                    &target.datacenter,
                    &target.foundation,
                ));
            }
        }

        sources
    }

    /// Merge the applicable documents into one sorted document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoApplicableFiles`] if none of the five candidate
    /// files exist, [`Error::Parse`] if a contributing file is not valid
    /// YAML, or [`Error::Validation`] if its top level is not a mapping.
    pub fn merge(&self, target: &MergeTarget) -> Result<MergedDocument> {
        let sources = self.sources(target);
        if sources.is_empty() {
            return Err(Error::NoApplicableFiles {
                datacenter: target.datacenter.clone(),
                foundation: target.foundation.clone(),
                environment: target.environment,
            });
        }

        let mut merged = Value::Mapping(Mapping::new());
        for source in &sources {
            log::debug!("merging {} ({})", source.descriptor(), source.level());
            if let Some(layer) = load_layer(source.path())? {
                merged = deep_merge(merged, layer);
            }
        }

        Ok(MergedDocument {
            target: target.clone(),
            sources,
            value: sort_keys(merged),
        })
    }
}

/// Read one contributing document. Empty documents contribute nothing.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if its top
/// level is not a mapping.
pub fn load_layer(path: &Path) -> Result<Option<Value>> {
    let contents = fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Ok(None);
    }

    let value: Value = serde_yaml::from_str(&contents).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Null => Ok(None),
        Value::Mapping(_) => Ok(Some(value)),
        _ => Err(Error::Validation {
            field: path.display().to_string(),
            message: "top level of a parameter file must be a mapping".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::Level;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    fn merge(root: &Path, env: Environment) -> Result<MergedDocument> {
        let scanner = HierarchyScanner::new(root, vec!["yml".to_string()]).unwrap();
        let target = MergeTarget::new("dc1", "f1", env).unwrap();
        PrecedenceMerger::new(&scanner).merge(&target)
    }

    fn yaml(text: &str) -> Value {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn test_foundation_overrides_global() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "global.yml", "a:\n  b: 1\n");
        write(temp.path(), "dc1/f1.yml", "a:\n  b: 2\n");

        let merged = merge(temp.path(), Environment::Prod).unwrap();
        assert_eq!(merged.value(), &yaml("a:\n  b: 2\n"));
    }

    #[test]
    fn test_datacenter_values_survive() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "dc1/datacenter.yml", "y: 1\n");
        write(temp.path(), "dc1/f1.yml", "z: 2\n");

        let merged = merge(temp.path(), Environment::Prod).unwrap();
        assert_eq!(merged.value(), &yaml("y: 1\nz: 2\n"));
    }

    #[test]
    fn test_full_precedence_chain() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(root, "global.yml", "k1: g\nk2: g\nk3: g\nk4: g\nk5: g\n");
        write(root, "global-lab.yml", "k2: gl\nk3: gl\nk4: gl\nk5: gl\n");
        write(root, "dc1/datacenter.yml", "k3: d\nk4: d\nk5: d\n");
        write(root, "dc1/datacenter-lab.yml", "k4: dl\nk5: dl\n");
        write(root, "dc1/f1.yml", "k5: f\n");

        let merged = merge(root, Environment::Lab).unwrap();
        assert_eq!(
            merged.value(),
            &yaml("k1: g\nk2: gl\nk3: d\nk4: dl\nk5: f\n")
        );
        let levels: Vec<_> = merged.sources().iter().map(Document::level).collect();
        assert_eq!(
            levels,
            vec![
                Level::Global,
                Level::Global,
                Level::Datacenter,
                Level::Datacenter,
                Level::Foundation
            ]
        );
    }

    #[test]
    fn test_other_environments_are_ignored() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(root, "global.yml", "x: base\n");
        write(root, "global-lab.yml", "x: lab\n");
        write(root, "global-prod.yml", "x: prod\n");

        let merged = merge(root, Environment::Nonprod).unwrap();
        assert_eq!(merged.value(), &yaml("x: base\n"));

        let merged = merge(root, Environment::Prod).unwrap();
        assert_eq!(merged.value(), &yaml("x: prod\n"));
    }

    #[test]
    fn test_no_files_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = merge(temp.path(), Environment::Prod).unwrap_err();
        assert!(err.is_no_applicable_files());
    }

    #[test]
    fn test_other_foundations_do_not_contribute() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "dc1/f2.yml", "x: 1\n");
        let err = merge(temp.path(), Environment::Prod).unwrap_err();
        assert!(err.is_no_applicable_files());
    }

    #[test]
    fn test_empty_file_contributes_nothing() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "global.yml", "x: 1\n");
        write(temp.path(), "dc1/f1.yml", "\n");
        let merged = merge(temp.path(), Environment::Prod).unwrap();
        assert_eq!(merged.value(), &yaml("x: 1\n"));
        assert_eq!(merged.sources().len(), 2);
    }

    #[test]
    fn test_unparseable_contributor_is_fatal() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "global.yml", "x: [1\n");
        let err = merge(temp.path(), Environment::Prod).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_non_mapping_contributor_is_rejected() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "global.yml", "- a\n- b\n");
        let err = merge(temp.path(), Environment::Prod).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_invalid_target_identifiers() {
        assert!(MergeTarget::new("", "f1", Environment::Prod).is_err());
        assert!(MergeTarget::new("dc1", "..", Environment::Prod).is_err());
        assert!(MergeTarget::new("dc1", "a/b", Environment::Prod).is_err());
        assert!(MergeTarget::new("dc1", "datacenter-lab", Environment::Lab).is_err());
    }
}
