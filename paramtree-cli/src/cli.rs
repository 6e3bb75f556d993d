//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    FindDuplicatesCommand, GenerateFoundationCommand, ListFilesCommand, ShowSourcesCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Resolve hierarchical parameters for deployment foundations.
#[derive(Parser)]
#[command(name = "paramtree")]
#[command(
    version,
    about = "Resolve hierarchical deployment parameters",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Root of the parameter repository
    #[arg(value_name = "REPO_PATH")]
    pub repo_path: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Report parameters defined with the same value in several files
    FindDuplicates(FindDuplicatesCommand),

    /// Merge the hierarchy into one parameter set for a foundation
    GenerateFoundation(GenerateFoundationCommand),

    /// List every classified parameter document
    ListFiles(ListFilesCommand),

    /// Show which files contribute to a foundation, in precedence order
    ShowSources(ShowSourcesCommand),
}
