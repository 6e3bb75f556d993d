//! Command to report redundantly defined parameters.

use crate::error::CliError;
use crate::utils::{open_repository, GlobalOptions};
use clap::Args;
use paramtree::{Config, DuplicateAnalyzer, ReportFormat};
use std::io::{self, Write};

/// Report parameters whose value is repeated in two or more files.
#[derive(Args)]
pub struct FindDuplicatesCommand {
    /// Report format: human or json
    #[arg(long, value_name = "FORMAT", default_value = "human")]
    pub format: ReportFormat,
}

impl FindDuplicatesCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let repo = open_repository(global, Config::default())?;

        let catalog = repo.scanner.scan()?;
        global
            .logger
            .debug(&format!("scanned {} document(s)", catalog.len()));

        let groups = DuplicateAnalyzer::analyze(&catalog);
        let report = self.format.create_formatter().format(&groups)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(report.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
