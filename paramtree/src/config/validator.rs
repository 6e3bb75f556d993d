//! Settings validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates merged settings.
///
/// # Examples
///
/// ```
/// use paramtree::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { extensions: Some(vec![]), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a settings value.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty extension list or an
    /// extension containing a dot, a path separator, or whitespace.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref extensions) = config.extensions {
            if extensions.is_empty() {
                return Err(Error::Validation {
                    field: "extensions".into(),
                    message: "at least one extension is required".into(),
                });
            }
            for ext in extensions {
                Self::validate_extension(ext)?;
            }
        }
        Ok(())
    }

    fn validate_extension(ext: &str) -> Result<()> {
        let bad_char = ext
            .chars()
            .any(|c| c == '.' || c == '/' || c == '\\' || c.is_whitespace());
        if ext.is_empty() || bad_char {
            return Err(Error::Validation {
                field: "extensions".into(),
                message: format!("'{ext}' is not a valid extension (use e.g. 'yml')"),
            });
        }
        Ok(())
    }
}
