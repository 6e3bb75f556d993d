//! Main entry point for the paramtree CLI.
//!
//! Resolves hierarchical deployment parameters stored in a repository:
//! - `find-duplicates`: report parameters repeated with the same value
//! - `generate-foundation`: merge the hierarchy for one foundation
//! - `list-files`: list classified parameter documents
//! - `show-sources`: list the files contributing to a foundation

mod cli;
mod commands;
mod error;
mod interrupt;
mod utils;

use clap::Parser;
use cli::Cli;
use interrupt::ScratchRegistry;
use utils::GlobalOptions;

fn main() {
    // Usage errors exit with 1; --help and --version exit with 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = i32::from(e.use_stderr());
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let logger = paramtree::init_logger(cli.verbose, cli.quiet);
    logger.install();

    let scratch = ScratchRegistry::new();
    if let Err(e) = scratch.install() {
        logger.warn(&format!("could not install interrupt handler: {e}"));
    }

    let global = GlobalOptions {
        repo_path: cli.repo_path,
        logger,
        scratch,
    };

    let result = match cli.command {
        cli::Command::FindDuplicates(cmd) => cmd.execute(&global),
        cli::Command::GenerateFoundation(cmd) => cmd.execute(&global),
        cli::Command::ListFiles(cmd) => cmd.execute(&global),
        cli::Command::ShowSources(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            logger.error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    }
}
