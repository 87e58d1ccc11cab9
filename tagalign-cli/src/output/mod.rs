//! Output formatting module

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tagalign_core::Format;

/// Trait for output formatters
pub trait OutputFormatter: Send {
    /// Write one serialized document
    fn write_document(&mut self, document: &str) -> Result<()>;

    /// Finalize output and flush
    fn finish(&mut self) -> Result<()>;

    /// Number of documents written so far
    fn documents(&self) -> usize;
}

pub mod json;
pub mod tags;

pub use json::JsonLinesFormatter;
pub use tags::TagBlockFormatter;

/// Formatter for `format`, writing to `output` or stdout
pub fn create_formatter(
    format: Format,
    output: Option<&Path>,
    separator: &str,
) -> Result<Box<dyn OutputFormatter>> {
    let writer: Box<dyn Write + Send> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout())),
    };

    Ok(match format {
        Format::Jsonl => Box::new(JsonLinesFormatter::new(writer)),
        Format::Iob2 | Format::Bilou => Box::new(TagBlockFormatter::new(writer, separator)),
    })
}
