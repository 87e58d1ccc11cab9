//! JSON-lines output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// One serialized record per line
pub struct JsonLinesFormatter<W: Write> {
    writer: W,
    documents: usize,
}

impl<W: Write> JsonLinesFormatter<W> {
    /// Create a new JSON-lines formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: 0,
        }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> OutputFormatter for JsonLinesFormatter<W> {
    fn write_document(&mut self, document: &str) -> Result<()> {
        writeln!(self.writer, "{document}")?;
        self.documents += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn documents(&self) -> usize {
        self.documents
    }
}
