//! Validate command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::pipeline::{Converter, FilterKind};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tagalign_core::{Format, ViewKind};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Input JSON-lines files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Format whose overlap rules apply [default: iob2]
    #[arg(short, long)]
    pub format: Option<Format>,

    /// Text view entities are aligned against [default: token]
    #[arg(long)]
    pub view: Option<ViewKind>,

    /// Overlap resolution applied before checking [default: longest]
    #[arg(long, value_enum)]
    pub filter: Option<FilterKind>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Totals gathered by a validation run
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    /// Files read
    pub files: usize,
    /// Records read
    pub records: usize,
    /// Problems found
    pub problems: usize,
}

impl ValidateArgs {
    /// Check every record, printing one line per problem
    pub fn run(&self) -> Result<ValidationSummary> {
        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let converter = Converter::new(
            self.format.unwrap_or(config.conversion.format),
            self.view.unwrap_or(config.conversion.view),
            self.filter.unwrap_or(config.conversion.filter),
        );

        let files = resolve_patterns(&self.input)?;
        let mut summary = ValidationSummary {
            files: files.len(),
            ..Default::default()
        };

        for path in &files {
            let records = FileReader::read_records(path)?;
            summary.records += records.len();
            for (source, problems) in records.iter().zip(converter.check_all(&records)) {
                for problem in &problems {
                    println!("{}:{}: {problem}", source.path.display(), source.line);
                }
                summary.problems += problems.len();
            }
        }

        Ok(summary)
    }

    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let summary = self.run()?;
        println!(
            "Checked {} record(s) in {} file(s): {} problem(s)",
            summary.records, summary.files, summary.problems
        );

        if summary.problems > 0 {
            return Err(CliError::ValidationFailed(summary.problems).into());
        }
        println!("✓ All records are valid");
        Ok(())
    }
}
