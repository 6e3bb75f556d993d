//! Command to merge the hierarchy for one foundation.

use crate::error::CliError;
use crate::utils::{open_repository, GlobalOptions};
use clap::Args;
use paramtree::output::write_merged;
use paramtree::{
    Config, Destination, Environment, MergeTarget, OutputFormat, PrecedenceMerger, WorkDir,
};
use std::io;
use std::path::PathBuf;

/// Merge global, datacenter and foundation parameters for one target.
#[derive(Args)]
pub struct GenerateFoundationCommand {
    /// Datacenter directory name
    #[arg(value_name = "DATACENTER")]
    pub datacenter: String,

    /// Foundation name (file stem inside the datacenter directory)
    #[arg(value_name = "FOUNDATION")]
    pub foundation: String,

    /// Environment variant: lab, nonprod or prod [default: prod]
    #[arg(short, long, value_name = "ENV")]
    pub environment: Option<Environment>,

    /// Write the merged parameters to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format: yaml or json
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl GenerateFoundationCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let overrides = Config {
            default_environment: self.environment,
            output_format: self.format,
            ..Default::default()
        };
        let repo = open_repository(global, overrides)?;

        let target = MergeTarget::new(self.datacenter, self.foundation, repo.config.environment())
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let merged = PrecedenceMerger::new(&repo.scanner).merge(&target)?;
        for source in merged.sources() {
            global.logger.debug(&format!(
                "applied {} ({})",
                source.descriptor(),
                source.level()
            ));
        }

        let destination = self.output.map_or(Destination::Stdout, Destination::File);
        let scratch = WorkDir::new()?;
        global.scratch.track(&scratch);

        let written = write_merged(
            &merged,
            repo.config.output_format(),
            &destination,
            &scratch,
            &mut io::stdout().lock(),
        );
        global.scratch.release();
        let closed = scratch.close();
        written?;
        closed?;

        if let Destination::File(path) = &destination {
            global.logger.info(&format!(
                "Wrote merged parameters for {}/{} ({}) to {}",
                target.datacenter,
                target.foundation,
                target.environment,
                path.display()
            ));
        }
        Ok(())
    }
}
