//! Text views over annotated documents
//!
//! Annotations are always expressed in raw-character offsets, but models
//! consume either characters or tokens. A [`StringSequence`] is the view a
//! serializer works against: an ordered sequence of units plus the
//! translation from annotation offsets into unit indices.
//!
//! Two views exist:
//! - [`RawView`]: one unit per character, translation is the identity
//! - [`TokenView`]: one unit per token, translation goes through boundary
//!   maps built from an [`Aligner`](crate::Aligner)
//!
//! [`TextView`] wraps either one when the choice is made at runtime.

mod raw;
mod token;

pub use raw::RawView;
pub use token::TokenView;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Indexable unit sequence with offset alignment.
///
/// `Display` renders the full underlying text.
pub trait StringSequence: fmt::Display {
    /// Whether `(start, end)` can be aligned into this view
    fn validate_offset(&self, start: usize, end: usize) -> bool;

    /// Translate inclusive annotation offsets into inclusive unit indices
    fn align_offset(&self, start: usize, end: usize) -> Result<(usize, usize)>;

    /// Number of units
    fn len(&self) -> usize;

    /// Whether the view has no units
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Unit at `index`
    fn get(&self, index: usize) -> Option<&str>;

    /// Iterate over units in order
    fn units(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Units in the inclusive index range `[start, end]`
    fn slice(&self, start: usize, end: usize) -> Option<Vec<&str>> {
        if start > end || end >= self.len() {
            return None;
        }
        (start..=end).map(|index| self.get(index)).collect()
    }
}

/// Which view to build for a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    /// Character units
    Raw,
    /// Token units
    #[default]
    Token,
}

impl ViewKind {
    /// All view kinds
    pub const ALL: [ViewKind; 2] = [ViewKind::Raw, ViewKind::Token];

    /// Lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            ViewKind::Raw => "raw",
            ViewKind::Token => "token",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "raw" | "char" | "chars" => Ok(ViewKind::Raw),
            "token" | "tokens" => Ok(ViewKind::Token),
            other => Err(format!("unknown view '{other}'")),
        }
    }
}

/// Either view, selected at runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextView {
    /// Character view
    Raw(RawView),
    /// Token view
    Token(TokenView),
}

impl TextView {
    /// Character view over `text`
    pub fn raw(text: impl Into<String>) -> Self {
        TextView::Raw(RawView::new(text))
    }

    /// Token view using the default aligner
    pub fn tokens(tokens: Vec<String>, space_after: Vec<bool>) -> Result<Self> {
        TokenView::new(tokens, space_after).map(TextView::Token)
    }

    /// Kind of this view
    pub fn kind(&self) -> ViewKind {
        match self {
            TextView::Raw(_) => ViewKind::Raw,
            TextView::Token(_) => ViewKind::Token,
        }
    }

    fn inner(&self) -> &dyn StringSequence {
        match self {
            TextView::Raw(view) => view,
            TextView::Token(view) => view,
        }
    }
}

impl From<RawView> for TextView {
    fn from(view: RawView) -> Self {
        TextView::Raw(view)
    }
}

impl From<TokenView> for TextView {
    fn from(view: TokenView) -> Self {
        TextView::Token(view)
    }
}

impl fmt::Display for TextView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextView::Raw(view) => fmt::Display::fmt(view, f),
            TextView::Token(view) => fmt::Display::fmt(view, f),
        }
    }
}

impl StringSequence for TextView {
    fn validate_offset(&self, start: usize, end: usize) -> bool {
        self.inner().validate_offset(start, end)
    }

    fn align_offset(&self, start: usize, end: usize) -> Result<(usize, usize)> {
        self.inner().align_offset(start, end)
    }

    fn len(&self) -> usize {
        self.inner().len()
    }

    fn get(&self, index: usize) -> Option<&str> {
        self.inner().get(index)
    }

    fn units(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        self.inner().units()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_text_view_delegates() {
        let raw = TextView::raw("abc");
        assert_eq!(raw.kind(), ViewKind::Raw);
        assert_eq!(raw.len(), 3);
        assert_eq!(raw.align_offset(0, 2), Ok((0, 2)));
        assert_eq!(raw.to_string(), "abc");

        let tokens = TextView::tokens(vec!["ab".into(), "c".into()], vec![true, false]).unwrap();
        assert_eq!(tokens.kind(), ViewKind::Token);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens.align_offset(3, 3), Ok((1, 1)));
        assert_eq!(tokens.to_string(), "ab c");
        assert_eq!(tokens.units().collect::<Vec<_>>(), vec!["ab", "c"]);
    }

    #[test]
    fn test_slice_bounds() {
        let view = TextView::raw("hello");
        assert_eq!(view.slice(1, 3), Some(vec!["e", "l", "l"]));
        assert_eq!(view.slice(3, 1), None);
        assert_eq!(view.slice(2, 5), None);
    }

    #[test]
    fn test_view_kind_parse() {
        assert_eq!("raw".parse::<ViewKind>(), Ok(ViewKind::Raw));
        assert_eq!("Tokens".parse::<ViewKind>(), Ok(ViewKind::Token));
        assert!("words".parse::<ViewKind>().is_err());
    }

    #[test]
    fn test_view_kind_default_is_token() {
        assert_eq!(ViewKind::default(), ViewKind::Token);
    }

    #[test]
    fn test_align_errors_propagate() {
        let view = TextView::tokens(vec!["Paris".into()], vec![false]).unwrap();
        assert_eq!(
            view.align_offset(1, 4),
            Err(CoreError::InvalidOffset { start: 1, end: 4 })
        );
    }
}
