//! Command to list the classified parameter documents.

use crate::error::CliError;
use crate::utils::{open_repository, GlobalOptions};
use clap::Args;
use paramtree::{Config, Document};
use std::io::{self, Write};

/// List every parameter document with its level and variant.
#[derive(Args)]
pub struct ListFilesCommand {}

impl ListFilesCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let repo = open_repository(global, Config::default())?;
        let catalog = repo.scanner.scan()?;

        if catalog.is_empty() {
            global.logger.warn("no parameter documents found");
            return Ok(());
        }

        let mut stdout = io::stdout().lock();
        for document in &catalog {
            writeln!(stdout, "{}", describe(document))?;
        }
        stdout.flush()?;
        Ok(())
    }
}

/// One catalog line: level, variant, then the file descriptor.
pub fn describe(document: &Document) -> String {
    let variant = document
        .environment()
        .map_or_else(|| "base".to_string(), |env| env.to_string());
    format!(
        "{:<10}  {:<7}  {}",
        document.level().label(),
        variant,
        document.descriptor()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use paramtree::Environment;
    use std::path::PathBuf;

    #[test]
    fn test_describe_columns() {
        let doc = Document::datacenter(
            PathBuf::from("/repo/dc1/datacenter-lab.yml"),
            "dc1",
            Some(Environment::Lab),
        );
        assert_eq!(describe(&doc), "Datacenter  lab      dc1/datacenter-lab.yml");

        let doc = Document::global(PathBuf::from("/repo/global.yml"), None);
        assert_eq!(describe(&doc), "Global      base     global.yml");
    }
}
