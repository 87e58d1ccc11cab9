//! Annotation records read from JSON lines

use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tagalign_core::{Entity, TextView, TokenView, ViewKind};

/// One annotated document.
///
/// Entity offsets are inclusive character offsets into `text`, or into the
/// text reconstructed from `tokens` and `space_after` when `text` is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedRecord {
    /// Raw document text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Pre-tokenized document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<String>>,

    /// Whether a space follows each token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_after: Option<Vec<bool>>,

    /// Labeled spans
    #[serde(default)]
    pub entities: Vec<Entity>,
}

impl AnnotatedRecord {
    /// Build the requested view
    pub fn view(&self, kind: ViewKind) -> Result<TextView> {
        match kind {
            ViewKind::Raw => match (&self.text, &self.tokens) {
                (Some(text), _) => Ok(TextView::raw(text.as_str())),
                (None, Some(_)) => Ok(TextView::raw(self.token_view()?.as_str())),
                (None, None) => bail!("record has neither `text` nor `tokens`"),
            },
            ViewKind::Token => Ok(TextView::Token(self.token_view()?)),
        }
    }

    fn token_view(&self) -> Result<TokenView> {
        let tokens = self
            .tokens
            .clone()
            .ok_or_else(|| anyhow!("token view requires a `tokens` field"))?;

        let view = match &self.space_after {
            Some(flags) => TokenView::new(tokens, flags.clone())?,
            None => TokenView::from_tokens(tokens),
        };

        if let Some(text) = &self.text {
            if text != view.as_str() {
                bail!("tokens do not reconstruct `text` (got {:?})", view.as_str());
            }
        }
        Ok(view)
    }
}

impl AsRef<AnnotatedRecord> for AnnotatedRecord {
    fn as_ref(&self) -> &AnnotatedRecord {
        self
    }
}

/// A record with the location it was read from
#[derive(Debug, Clone)]
pub struct SourcedRecord {
    /// Source file
    pub path: PathBuf,
    /// 1-based line number
    pub line: usize,
    /// The record
    pub record: AnnotatedRecord,
}

impl AsRef<AnnotatedRecord> for SourcedRecord {
    fn as_ref(&self) -> &AnnotatedRecord {
        &self.record
    }
}
