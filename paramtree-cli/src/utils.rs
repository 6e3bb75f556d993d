//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across commands: global options,
//! repository opening and settings resolution.

use crate::error::CliError;
use crate::interrupt::ScratchRegistry;
use paramtree::hierarchy::validate_repo_root;
use paramtree::{Config, ConfigBuilder, HierarchyScanner, Logger};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Root of the parameter repository.
    pub repo_path: PathBuf,

    /// Logger resolved from --verbose/--quiet and the environment.
    pub logger: Logger,

    /// Scratch directory registry consulted by the interrupt handler.
    pub scratch: ScratchRegistry,
}

/// A validated repository together with its effective settings.
pub struct Repository {
    /// Scanner rooted at the repository.
    pub scanner: HierarchyScanner,
    /// Effective settings.
    pub config: Config,
}

/// Validate the repository root, then resolve settings and build a scanner.
///
/// Settings precedence: defaults < `.paramtree.yaml` < PARAMTREE_* variables
/// < `overrides` (command-line flags).
pub fn open_repository(global: &GlobalOptions, overrides: Config) -> Result<Repository, CliError> {
    validate_repo_root(&global.repo_path)?;

    let config = ConfigBuilder::new()
        .with_repo_root(&global.repo_path)
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let scanner = HierarchyScanner::new(&global.repo_path, config.extensions())?;
    global.logger.debug(&format!(
        "repository {} (extensions: {})",
        global.repo_path.display(),
        config.extensions().join(", ")
    ));

    Ok(Repository { scanner, config })
}
