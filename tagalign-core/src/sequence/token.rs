//! Token view with boundary maps

use super::StringSequence;
use crate::alignment::{Aligner, CharAligner};
use crate::error::{CoreError, Result};
use std::collections::HashMap;
use std::fmt;

/// A token sequence whose text is the tokens joined by optional single
/// spaces.
///
/// Annotation offsets are translated through two partial maps: the first
/// character of every token maps to its index in `start_boundaries`, the
/// last character in `end_boundaries`. A span is alignable only when it
/// starts and ends exactly on token boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenView {
    tokens: Vec<String>,
    space_after: Vec<bool>,
    text: String,
    start_boundaries: HashMap<usize, usize>,
    end_boundaries: HashMap<usize, usize>,
}

impl TokenView {
    /// Build a view aligned with [`CharAligner`]
    pub fn new(tokens: Vec<String>, space_after: Vec<bool>) -> Result<Self> {
        Self::with_aligner(tokens, space_after, &CharAligner)
    }

    /// Build a view with a space after every token except the last
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        let mut space_after = vec![true; tokens.len()];
        if let Some(last) = space_after.last_mut() {
            *last = false;
        }
        let text = reconstruct(&tokens, &space_after);
        let mapping = CharAligner.align(&tokens, &text);
        Self::from_mapping(tokens, space_after, text, mapping)
    }

    /// Build a view aligned by `aligner`
    pub fn with_aligner<A>(tokens: Vec<String>, space_after: Vec<bool>, aligner: &A) -> Result<Self>
    where
        A: Aligner + ?Sized,
    {
        if tokens.len() != space_after.len() {
            return Err(CoreError::SpacingMismatch {
                tokens: tokens.len(),
                flags: space_after.len(),
            });
        }
        let text = reconstruct(&tokens, &space_after);
        let mapping = aligner.align(&tokens, &text);
        Ok(Self::from_mapping(tokens, space_after, text, mapping))
    }

    fn from_mapping(
        tokens: Vec<String>,
        space_after: Vec<bool>,
        text: String,
        mapping: Vec<Vec<usize>>,
    ) -> Self {
        let mut start_boundaries = HashMap::with_capacity(tokens.len());
        let mut end_boundaries = HashMap::with_capacity(tokens.len());

        for (index, covered) in mapping.iter().enumerate() {
            let (Some(&first), Some(&last)) = (covered.first(), covered.last()) else {
                log::trace!("token {index} covers no characters");
                continue;
            };
            if let Some(previous) = start_boundaries.insert(first, index) {
                log::debug!("token {index} shadows start boundary {first} of token {previous}");
            }
            if let Some(previous) = end_boundaries.insert(last, index) {
                log::debug!("token {index} shadows end boundary {last} of token {previous}");
            }
        }

        Self {
            tokens,
            space_after,
            text,
            start_boundaries,
            end_boundaries,
        }
    }

    /// Tokens in order
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Spacing flags, one per token
    pub fn space_after(&self) -> &[bool] {
        &self.space_after
    }

    /// Reconstructed text
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

fn reconstruct(tokens: &[String], space_after: &[bool]) -> String {
    let mut text = String::with_capacity(tokens.iter().map(|t| t.len() + 1).sum());
    for (token, &space) in tokens.iter().zip(space_after) {
        text.push_str(token);
        if space {
            text.push(' ');
        }
    }
    text
}

impl fmt::Display for TokenView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl StringSequence for TokenView {
    fn validate_offset(&self, start: usize, end: usize) -> bool {
        self.align_offset(start, end).is_ok()
    }

    fn align_offset(&self, start: usize, end: usize) -> Result<(usize, usize)> {
        match (
            self.start_boundaries.get(&start),
            self.end_boundaries.get(&end),
        ) {
            // Shadowed boundaries can invert the token span
            (Some(&first), Some(&last)) if start <= end && first <= last => Ok((first, last)),
            _ => Err(CoreError::InvalidOffset { start, end }),
        }
    }

    fn len(&self) -> usize {
        self.tokens.len()
    }

    fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    fn units(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.tokens.iter().map(String::as_str))
    }
}
