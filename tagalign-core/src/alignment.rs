//! Token-to-character alignment
//!
//! A [`TokenView`](crate::TokenView) needs to know which raw characters each
//! token covers before it can translate annotation offsets into token
//! indices. That knowledge comes from an [`Aligner`]. Any tokenizer that can
//! report character coverage can be plugged in; [`CharAligner`] is the
//! default and works for tokens that appear verbatim in the text.

/// Maps each token to the raw character indices it covers.
///
/// The returned vector has one entry per token. Each entry lists ascending,
/// contiguous character indices (counted in Unicode scalar values) into
/// `text`. An empty entry means the token covers nothing and will never
/// match an offset boundary.
pub trait Aligner {
    /// Align `tokens` against `text`
    fn align(&self, tokens: &[String], text: &str) -> Vec<Vec<usize>>;
}

/// Exact character matcher.
///
/// Walks the text once, left to right. Each token is matched at the cursor
/// or at the first position within the whitespace run that follows it.
/// Tokens that do not match (and empty tokens) cover no characters and leave
/// the cursor where it is.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharAligner;

impl CharAligner {
    /// Create a new aligner
    pub fn new() -> Self {
        Self
    }
}

impl Aligner for CharAligner {
    fn align(&self, tokens: &[String], text: &str) -> Vec<Vec<usize>> {
        let chars: Vec<char> = text.chars().collect();
        let mut cursor = 0;

        tokens
            .iter()
            .enumerate()
            .map(|(index, token)| {
                let token_chars: Vec<char> = token.chars().collect();
                if token_chars.is_empty() {
                    log::trace!("token {index} is empty and covers no characters");
                    return Vec::new();
                }

                let matches_at = |start: usize| {
                    chars
                        .get(start..start + token_chars.len())
                        .is_some_and(|window| window == token_chars.as_slice())
                };

                // Leading whitespace may belong to the token itself
                let skipped = chars[cursor..]
                    .iter()
                    .take_while(|c| c.is_whitespace())
                    .count();
                let start = (cursor..=cursor + skipped).find(|&start| matches_at(start));

                match start {
                    Some(start) => {
                        cursor = start + token_chars.len();
                        (start..cursor).collect()
                    }
                    None => {
                        log::trace!("token {index} ({token:?}) not found at character {cursor}");
                        Vec::new()
                    }
                }
            })
            .collect()
    }
}
