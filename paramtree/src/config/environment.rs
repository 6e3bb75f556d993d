//! Environment variable handling for settings overrides.
//!
//! This module provides support for PARAMTREE_* environment variables that
//! override settings file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;

/// Overrides the default environment variant.
pub const ENV_ENVIRONMENT: &str = "PARAMTREE_ENVIRONMENT";

/// Overrides the merged output format.
pub const ENV_OUTPUT_FORMAT: &str = "PARAMTREE_OUTPUT_FORMAT";

/// Overrides the document extensions (comma-separated).
pub const ENV_EXTENSIONS: &str = "PARAMTREE_EXTENSIONS";

/// Handles environment variable overrides for settings.
///
/// # Examples
///
/// ```no_run
/// use paramtree::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply PARAMTREE_* overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable holds an invalid value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        Self::apply_overrides_from(config, |key| env::var(key).ok())
    }

    /// Apply overrides using `lookup` to read variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable holds an invalid value.
    pub fn apply_overrides_from<F>(config: &mut Config, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_ENVIRONMENT) {
            config.default_environment = Some(value.trim().parse().map_err(|_| {
                Error::Validation {
                    field: ENV_ENVIRONMENT.into(),
                    message: format!("'{value}' is not one of lab, nonprod, prod"),
                }
            })?);
        }

        if let Some(value) = lookup(ENV_OUTPUT_FORMAT) {
            config.output_format = Some(value.trim().parse().map_err(|_| Error::Validation {
                field: ENV_OUTPUT_FORMAT.into(),
                message: format!("'{value}' is not one of yaml, json"),
            })?);
        }

        if let Some(value) = lookup(ENV_EXTENSIONS) {
            config.extensions = Some(Self::parse_list(&value));
        }

        Ok(())
    }

    /// Parse a comma-separated list, dropping blanks and leading dots.
    fn parse_list(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(|item| item.trim().trim_start_matches('.'))
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect()
    }
}
