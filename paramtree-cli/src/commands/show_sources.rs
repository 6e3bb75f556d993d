//! Command to show the contributing files for a foundation.

use crate::commands::list_files::describe;
use crate::error::CliError;
use crate::utils::{open_repository, GlobalOptions};
use clap::Args;
use paramtree::{Config, Environment, Error, MergeTarget, PrecedenceMerger};
use std::io::{self, Write};

/// Show the files that would be merged for a target, lowest precedence first.
#[derive(Args)]
pub struct ShowSourcesCommand {
    /// Datacenter directory name
    #[arg(value_name = "DATACENTER")]
    pub datacenter: String,

    /// Foundation name (file stem inside the datacenter directory)
    #[arg(value_name = "FOUNDATION")]
    pub foundation: String,

    /// Environment variant: lab, nonprod or prod [default: prod]
    #[arg(short, long, value_name = "ENV")]
    pub environment: Option<Environment>,
}

impl ShowSourcesCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let overrides = Config {
            default_environment: self.environment,
            ..Default::default()
        };
        let repo = open_repository(global, overrides)?;

        let target = MergeTarget::new(self.datacenter, self.foundation, repo.config.environment())
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let sources = PrecedenceMerger::new(&repo.scanner).sources(&target);
        if sources.is_empty() {
            return Err(Error::NoApplicableFiles {
                datacenter: target.datacenter,
                foundation: target.foundation,
                environment: target.environment,
            }
            .into());
        }

        let mut stdout = io::stdout().lock();
        for source in &sources {
            writeln!(stdout, "{}", describe(source))?;
        }
        stdout.flush()?;
        Ok(())
    }
}
