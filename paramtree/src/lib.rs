#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # paramtree
//!
//! Hierarchical parameter resolution for deployment foundations.
//!
//! Parameters live in a three-level hierarchy (global → datacenter →
//! foundation), each level optionally overridden per environment variant
//! (lab, nonprod, prod). This library discovers the documents in such a
//! repository, reports parameters defined redundantly across the hierarchy,
//! and merges the applicable documents for one target into a single,
//! deterministically ordered parameter set.
//!
//! ## Core Types
//!
//! - [`HierarchyScanner`] and [`Document`]: repository traversal and classification
//! - [`DuplicateAnalyzer`] and [`DuplicateGroup`]: redundant definition reports
//! - [`PrecedenceMerger`], [`MergeTarget`] and [`MergedDocument`]: target resolution
//! - [`WorkDir`]: scoped scratch space for staged output
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use paramtree::{Environment, HierarchyScanner, MergeTarget, PrecedenceMerger};
//! use std::fs;
//!
//! let repo = tempfile::tempdir().unwrap();
//! fs::write(repo.path().join("global.yml"), "a:\n  b: 1\n").unwrap();
//! fs::create_dir(repo.path().join("dc1")).unwrap();
//! fs::write(repo.path().join("dc1/foundation1.yml"), "a:\n  b: 2\n").unwrap();
//!
//! let scanner = HierarchyScanner::new(repo.path(), vec!["yml".into()]).unwrap();
//! let target = MergeTarget::new("dc1", "foundation1", Environment::Prod).unwrap();
//! let merged = PrecedenceMerger::new(&scanner).merge(&target).unwrap();
//! assert_eq!(serde_yaml::to_string(merged.value()).unwrap(), "a:\n  b: 2\n");
//! ```

pub mod config;
pub mod duplicates;
pub mod error;
pub mod flatten;
pub mod hierarchy;
pub mod logging;
pub mod merge;
pub mod output;
pub mod workdir;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use duplicates::{DuplicateAnalyzer, DuplicateGroup, Occurrence, ValueGroup};
pub use error::{Error, Result};
pub use flatten::FlatParameter;
pub use hierarchy::{Document, Environment, HierarchyScanner, Level};
pub use logging::{init_logger, LogLevel, Logger};
pub use merge::{MergeTarget, MergedDocument, PrecedenceMerger};
pub use output::{Destination, OutputFormat, ReportFormat};
pub use workdir::WorkDir;
