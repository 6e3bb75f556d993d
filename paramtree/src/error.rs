//! Error types for the paramtree library.
//!
//! This module provides the error hierarchy for scanning, flattening,
//! merging and rendering parameter hierarchies, using `thiserror` for
//! ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

use crate::hierarchy::Environment;

/// Result type alias for operations that may fail with a paramtree error.
///
/// # Examples
///
/// ```
/// use paramtree::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the paramtree library.
#[derive(Debug, Error)]
pub enum Error {
    /// The repository root does not exist or is not a directory.
    #[error("invalid repository path {}: {reason}", path.display())]
    InvalidRepoPath {
        /// The offending path.
        path: PathBuf,
        /// Why the path was rejected.
        reason: String,
    },

    /// A merge target resolved to zero contributing documents.
    #[error(
        "no parameter files found for {datacenter}/{foundation} (environment: {environment})"
    )]
    NoApplicableFiles {
        /// Requested datacenter.
        datacenter: String,
        /// Requested foundation.
        foundation: String,
        /// Requested environment variant.
        environment: Environment,
    },

    /// An environment variant outside {lab, nonprod, prod}.
    #[error("invalid environment '{value}': expected one of lab, nonprod, prod")]
    InvalidEnvironment {
        /// The rejected value.
        value: String,
    },

    /// A document contributing to a merge could not be parsed.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// The document that failed to parse.
        path: PathBuf,
        /// The underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },

    /// Writing merged output failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// The destination that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// YAML serialization failed.
    #[error("YAML serialization error: {0}")]
    Serialize(#[from] serde_yaml::Error),

    /// JSON serialization failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error means the target had nothing to merge.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramtree::{Environment, Error};
    ///
    /// let err = Error::NoApplicableFiles {
    ///     datacenter: "dc1".into(),
    ///     foundation: "f1".into(),
    ///     environment: Environment::Prod,
    /// };
    /// assert!(err.is_no_applicable_files());
    /// ```
    #[must_use]
    pub fn is_no_applicable_files(&self) -> bool {
        matches!(self, Self::NoApplicableFiles { .. })
    }

    /// Check if the error stems from the repository root itself.
    #[must_use]
    pub fn is_invalid_repo_path(&self) -> bool {
        matches!(self, Self::InvalidRepoPath { .. })
    }
}
