//! Settings schema for the `.paramtree.yaml` file.

use serde::Deserialize;

use crate::hierarchy::Environment;
use crate::output::OutputFormat;

/// Name of the optional settings file at the repository root.
pub const SETTINGS_FILE: &str = ".paramtree.yaml";

/// Document extensions recognized when nothing else is configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["yml"];

/// Tool settings, merged from defaults, the settings file, environment
/// variables and command-line flags.
///
/// Every field is optional so that partial sources can be layered; the
/// accessor methods fall back to built-in defaults.
///
/// # Examples
///
/// ```
/// use paramtree::config::Config;
/// use paramtree::Environment;
///
/// let config = Config {
///     default_environment: Some(Environment::Lab),
///     ..Default::default()
/// };
/// assert_eq!(config.environment(), Environment::Lab);
/// assert_eq!(config.extensions(), vec!["yml".to_string()]);
/// ```
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Document extensions in priority order, without the leading dot.
    pub extensions: Option<Vec<String>>,

    /// Environment used when `--environment` is not given.
    pub default_environment: Option<Environment>,

    /// Format for merged output.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Configured extensions, or [`DEFAULT_EXTENSIONS`].
    #[must_use]
    pub fn extensions(&self) -> Vec<String> {
        self.extensions.clone().unwrap_or_else(|| {
            DEFAULT_EXTENSIONS
                .iter()
                .map(ToString::to_string)
                .collect()
        })
    }

    /// Configured default environment, or prod.
    #[must_use]
    pub fn environment(&self) -> Environment {
        self.default_environment.unwrap_or_default()
    }

    /// Configured output format, or YAML.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.extensions(), vec!["yml"]);
        assert_eq!(config.environment(), Environment::Prod);
        assert_eq!(config.output_format(), OutputFormat::Yaml);
    }

    #[test]
    fn test_deserialize_full() {
        let yaml = "extensions: [yml, yaml]\ndefault_environment: nonprod\noutput_format: json\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.extensions(), vec!["yml", "yaml"]);
        assert_eq!(config.environment(), Environment::Nonprod);
        assert_eq!(config.output_format(), OutputFormat::Json);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("extension: yml\n");
        assert!(result.is_err());
    }
}
