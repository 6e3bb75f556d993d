//! Builder assembling settings from every source.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds the effective settings for one invocation.
///
/// Precedence, lowest to highest: built-in defaults, `.paramtree.yaml` in
/// the repository root, PARAMTREE_* environment variables, and finally
/// programmatic overrides (command-line flags).
///
/// # Examples
///
/// ```
/// use paramtree::config::{Config, ConfigBuilder};
/// use paramtree::Environment;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         default_environment: Some(Environment::Lab),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
/// assert_eq!(config.environment(), Environment::Lab);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    repo_root: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder with every source enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `.paramtree.yaml` from this repository root.
    #[must_use]
    pub fn with_repo_root(mut self, root: &Path) -> Self {
        self.repo_root = Some(root.to_path_buf());
        self
    }

    /// Ignore the settings file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore PARAMTREE_* environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply these settings on top of everything else.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merge and validate the configured sources.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file is malformed, an environment
    /// variable is invalid, or the merged settings fail validation.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            if let Some(root) = &self.repo_root {
                if let Some(source) = ConfigLoader::load_repo(root)? {
                    ConfigValidator::validate(&source.config)?;
                    ConfigMerger::merge_into(&mut config, &source.config);
                }
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::SETTINGS_FILE;
    use crate::hierarchy::Environment;
    use crate::output::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_only() {
        let config = ConfigBuilder::new().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_file_then_overrides() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(SETTINGS_FILE),
            "default_environment: lab\noutput_format: json\n",
        )
        .unwrap();

        let config = ConfigBuilder::new()
            .with_repo_root(temp.path())
            .skip_env()
            .with_config(Config {
                default_environment: Some(Environment::Nonprod),
                ..Default::default()
            })
            .build()
            .unwrap();

        assert_eq!(config.environment(), Environment::Nonprod);
        assert_eq!(config.output_format(), OutputFormat::Json);
    }

    #[test]
    fn test_skip_files_ignores_settings() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(SETTINGS_FILE), "output_format: json\n").unwrap();

        let config = ConfigBuilder::new()
            .with_repo_root(temp.path())
            .skip_files()
            .skip_env()
            .build()
            .unwrap();
        assert_eq!(config.output_format(), OutputFormat::Yaml);
    }

    #[test]
    fn test_invalid_settings_file_fails() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(SETTINGS_FILE), "extensions: []\n").unwrap();

        let result = ConfigBuilder::new()
            .with_repo_root(temp.path())
            .skip_env()
            .build();
        assert!(result.is_err());
    }
}
