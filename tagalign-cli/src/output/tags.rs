//! IOB2/BILOU block formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Tag blocks separated by a configurable separator (a blank line by
/// default), with a final newline after the last block
pub struct TagBlockFormatter<W: Write> {
    writer: W,
    separator: String,
    documents: usize,
}

impl<W: Write> TagBlockFormatter<W> {
    /// Create a new block formatter
    pub fn new(writer: W, separator: impl Into<String>) -> Self {
        Self {
            writer,
            separator: separator.into(),
            documents: 0,
        }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> OutputFormatter for TagBlockFormatter<W> {
    fn write_document(&mut self, document: &str) -> Result<()> {
        if self.documents > 0 {
            self.writer.write_all(self.separator.as_bytes())?;
        }
        self.writer.write_all(document.as_bytes())?;
        self.documents += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.documents > 0 {
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn documents(&self) -> usize {
        self.documents
    }
}
