//! Settings file discovery and loading.

use crate::config::schema::{Config, SETTINGS_FILE};
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A loaded settings file.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the settings file.
    pub path: PathBuf,
    /// Parsed settings.
    pub config: Config,
}

/// Loads settings files.
///
/// # Examples
///
/// ```no_run
/// use paramtree::config::ConfigLoader;
/// use std::path::Path;
///
/// if let Some(source) = ConfigLoader::load_repo(Path::new("/srv/params")).unwrap() {
///     println!("settings from {}", source.path.display());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load `<repo_root>/.paramtree.yaml` if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_repo(repo_root: &Path) -> Result<Option<ConfigSource>> {
        let path = repo_root.join(SETTINGS_FILE);
        if !path.is_file() {
            return Ok(None);
        }
        let config = Self::load_file(&path)?;
        log::debug!("loaded settings from {}", path.display());
        Ok(Some(ConfigSource { path, config }))
    }

    /// Load and parse a YAML settings file. An empty file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Failed to read settings file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::Environment;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/path/.paramtree.yaml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(SETTINGS_FILE);
        fs::write(&path, "extensions: [yml\n").unwrap();

        let err = ConfigLoader::load_file(&path).unwrap_err();
        assert!(format!("{err}").contains("Invalid YAML"));
    }

    #[test]
    fn test_load_repo_absent() {
        let temp_dir = TempDir::new().unwrap();
        assert!(ConfigLoader::load_repo(temp_dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_repo_present() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(SETTINGS_FILE),
            "default_environment: lab\n",
        )
        .unwrap();

        let source = ConfigLoader::load_repo(temp_dir.path()).unwrap().unwrap();
        assert_eq!(source.config.default_environment, Some(Environment::Lab));
        assert!(source.path.ends_with(SETTINGS_FILE));
    }

    #[test]
    fn test_empty_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(SETTINGS_FILE);
        fs::write(&path, "\n").unwrap();
        assert_eq!(ConfigLoader::load_file(&path).unwrap(), Config::default());
    }
}
