//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = self.generate_template()?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, template)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;
                println!("✓ Configuration written to {}", path.display());
                println!("  Use it with: tagalign convert -i <FILES> -c {}", path.display());
            }
            None => print!("{template}"),
        }

        Ok(())
    }

    /// Default configuration rendered as commented TOML
    fn generate_template(&self) -> Result<String> {
        let body = CliConfig::default().to_toml()?;
        Ok(format!(
            "# tagalign configuration\n\
             #\n\
             # conversion.format: jsonl | iob2 | bilou\n\
             # conversion.view:   raw | token\n\
             # conversion.filter: longest | none\n\
             # performance.worker_threads: 0 picks one thread per core\n\n\
             {body}"
        ))
    }
}
