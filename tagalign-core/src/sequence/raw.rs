//! Character view

use super::StringSequence;
use crate::error::{CoreError, Result};
use std::fmt;

/// The text itself, one unit per character.
///
/// Offsets count Unicode scalar values, so annotation offsets and unit
/// indices coincide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawView {
    text: String,
    /// Byte position of every character
    char_starts: Vec<usize>,
}

impl RawView {
    /// Create a view over `text`
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let char_starts = text.char_indices().map(|(pos, _)| pos).collect();
        Self { text, char_starts }
    }

    /// The underlying text
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for RawView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl StringSequence for RawView {
    fn validate_offset(&self, start: usize, end: usize) -> bool {
        start <= end && end < self.char_starts.len()
    }

    fn align_offset(&self, start: usize, end: usize) -> Result<(usize, usize)> {
        if !self.validate_offset(start, end) {
            return Err(CoreError::InvalidOffset { start, end });
        }
        Ok((start, end))
    }

    fn len(&self) -> usize {
        self.char_starts.len()
    }

    fn get(&self, index: usize) -> Option<&str> {
        let start = *self.char_starts.get(index)?;
        let end = self
            .char_starts
            .get(index + 1)
            .copied()
            .unwrap_or(self.text.len());
        Some(&self.text[start..end])
    }

    fn units(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(
            self.text
                .char_indices()
                .map(|(pos, c)| &self.text[pos..pos + c.len_utf8()]),
        )
    }
}

impl From<&str> for RawView {
    fn from(text: &str) -> Self {
        RawView::new(text)
    }
}

impl From<String> for RawView {
    fn from(text: String) -> Self {
        RawView::new(text)
    }
}
