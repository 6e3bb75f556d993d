//! Settings merging and precedence handling.

use crate::config::schema::Config;

/// Merges settings sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use paramtree::config::{Config, ConfigMerger};
/// use paramtree::Environment;
///
/// let low = Config { default_environment: Some(Environment::Lab), ..Default::default() };
/// let high = Config { default_environment: Some(Environment::Prod), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.default_environment, Some(Environment::Prod));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge `source` into `target`; every `Some` field in `source` wins.
    ///
    /// The extension list is replaced as a whole, never concatenated.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.extensions.is_some() {
            target.extensions.clone_from(&source.extensions);
        }
        if source.default_environment.is_some() {
            target.default_environment = source.default_environment;
        }
        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
