//! CLI runner - executes a conversion

use crate::cli::commands::Cli;
use crate::config::ConvertConfig;
use crate::convert::Converter;
use crate::error::{Error, Result, ResultExt};
use std::fs::File;
use std::io::{self, BufReader};
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the conversion, writing SQL to stdout
    pub fn run(&self) -> Result<()> {
        let config = self.build_config()?;
        config.warn_if_suspicious();

        let converter = Converter::new(config);
        let stdout = io::stdout().lock();

        let stats = match &self.cli.input {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::file_not_found(path.display().to_string()));
                }
                let file = File::open(path)
                    .with_context(|| format!("Failed to open {}", path.display()))?;
                converter.run(BufReader::new(file), stdout)?
            }
            None => converter.run(io::stdin().lock(), stdout)?,
        };

        info!(records = stats.records, "Wrote INSERT statement");
        Ok(())
    }

    /// Merge the config file (if any) with command-line flags
    pub fn build_config(&self) -> Result<ConvertConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ConvertConfig::from_file(path)?,
            None => ConvertConfig::default(),
        };

        if let Some(table) = &self.cli.table {
            config.table.clone_from(table);
        }
        config.create |= self.cli.create;
        config.strict |= self.cli.strict;

        Ok(config)
    }
}
