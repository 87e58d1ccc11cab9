//! Convert command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::create_formatter;
use crate::pipeline::{Converter, FilterKind};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tagalign_core::{Format, ViewKind};

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Input JSON-lines files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format: jsonl, iob2 or bilou [default: iob2]
    #[arg(short, long)]
    pub format: Option<Format>,

    /// Text view entities are aligned against: raw or token [default: token]
    #[arg(long)]
    pub view: Option<ViewKind>,

    /// Overlap resolution applied before serialization [default: longest]
    #[arg(long, value_enum)]
    pub filter: Option<FilterKind>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (0 = auto)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Log and skip records that fail instead of aborting
    #[arg(long)]
    pub skip_invalid: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Settings after merging the config file and flags
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertSettings {
    /// Output format
    pub format: Format,
    /// Text view
    pub view: ViewKind,
    /// Overlap resolution
    pub filter: FilterKind,
    /// Separator between tag blocks
    pub separator: String,
    /// Worker threads (0 = auto)
    pub threads: usize,
}

impl ConvertArgs {
    /// Merge flags over the configuration file
    pub fn settings(&self) -> Result<ConvertSettings> {
        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        Ok(ConvertSettings {
            format: self.format.unwrap_or(config.conversion.format),
            view: self.view.unwrap_or(config.conversion.view),
            filter: self.filter.unwrap_or(config.conversion.filter),
            separator: config.output.document_separator,
            threads: self.threads.unwrap_or(config.performance.worker_threads),
        })
    }

    /// Execute the convert command
    pub fn execute(&self) -> Result<()> {
        let settings = self.settings()?;
        log::info!(
            "Converting to {} over the {} view (filter: {})",
            settings.format,
            settings.view,
            settings.filter
        );

        let files = resolve_patterns(&self.input)?;
        let converter = Converter::new(settings.format, settings.view, settings.filter);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(settings.threads)
            .build()
            .context("Failed to build worker pool")?;

        let mut formatter =
            create_formatter(settings.format, self.output.as_deref(), &settings.separator)?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let mut skipped = 0;
        for path in &files {
            let records = FileReader::read_records(path)?;
            let results = pool.install(|| converter.convert_all(&records));

            let mut converted = 0;
            for (source, result) in records.iter().zip(results) {
                match result {
                    Ok(document) => {
                        formatter.write_document(&document)?;
                        converted += 1;
                    }
                    Err(e) if self.skip_invalid => {
                        log::warn!("Skipping {}:{}: {e:#}", source.path.display(), source.line);
                        skipped += 1;
                    }
                    Err(e) => {
                        progress.finish();
                        return Err(CliError::InvalidRecord {
                            path: source.path.clone(),
                            line: source.line,
                            reason: format!("{e:#}"),
                        }
                        .into());
                    }
                }
            }
            progress.file_completed(&path.display().to_string(), converted);
        }

        formatter.finish()?;
        progress.finish();
        log::info!(
            "Wrote {} document(s) from {} file(s), skipped {skipped}",
            formatter.documents(),
            files.len()
        );

        Ok(())
    }
}
