//! IOB2 and BILOU tag serializers

use super::Serializer;
use crate::entity::Entity;
use crate::error::{CoreError, Result};
use crate::sequence::StringSequence;
use std::fmt;

/// Tag for units outside every entity
pub const OUTSIDE: &str = "O";

/// Per-unit tagging scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagScheme {
    /// `B-` first unit, `I-` the rest
    Iob2,
    /// `U-` single unit, otherwise `B-`, `I-`..., `L-`
    Bilou,
}

impl TagScheme {
    /// One tag per unit of `text`.
    ///
    /// Fails on the first entity that does not align or that touches a unit
    /// already tagged by an earlier entity.
    pub fn tags(&self, text: &dyn StringSequence, entities: &[Entity]) -> Result<Vec<String>> {
        let mut tags = vec![OUTSIDE.to_string(); text.len()];

        for entity in entities {
            let (start, end) = text.align_offset(entity.start_offset(), entity.end_offset())?;
            let span = tags
                .get_mut(start..=end)
                .filter(|span| !span.is_empty())
                .ok_or(CoreError::InvalidOffset {
                    start: entity.start_offset(),
                    end: entity.end_offset(),
                })?;

            if span.iter().any(|tag| tag != OUTSIDE) {
                log::debug!("{self} tagging stopped at {entity}: units {start}..={end} already tagged");
                return Err(CoreError::OverlappingSpans { start, end });
            }
            self.fill(span, entity.label());
        }

        Ok(tags)
    }

    fn fill(&self, span: &mut [String], label: &str) {
        let last = span.len() - 1;
        for (i, tag) in span.iter_mut().enumerate() {
            let prefix = match self {
                TagScheme::Iob2 if i == 0 => 'B',
                TagScheme::Iob2 => 'I',
                TagScheme::Bilou if last == 0 => 'U',
                TagScheme::Bilou if i == 0 => 'B',
                TagScheme::Bilou if i == last => 'L',
                TagScheme::Bilou => 'I',
            };
            *tag = format!("{prefix}-{label}");
        }
    }

    /// `unit<TAB>tag` lines joined by `\n`
    pub fn save(&self, text: &dyn StringSequence, entities: &[Entity]) -> Result<String> {
        let tags = self.tags(text, entities)?;
        let lines: Vec<String> = text
            .units()
            .zip(&tags)
            .map(|(unit, tag)| format!("{unit}\t{tag}"))
            .collect();
        Ok(lines.join("\n"))
    }
}

impl fmt::Display for TagScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagScheme::Iob2 => write!(f, "IOB2"),
            TagScheme::Bilou => write!(f, "BILOU"),
        }
    }
}

/// IOB2 serializer
#[derive(Debug, Clone, Copy, Default)]
pub struct Iob2Serializer;

impl Serializer for Iob2Serializer {
    fn save(&self, text: &dyn StringSequence, entities: &[Entity]) -> Result<String> {
        TagScheme::Iob2.save(text, entities)
    }
}

/// BILOU serializer
#[derive(Debug, Clone, Copy, Default)]
pub struct BilouSerializer;

impl Serializer for BilouSerializer {
    fn save(&self, text: &dyn StringSequence, entities: &[Entity]) -> Result<String> {
        TagScheme::Bilou.save(text, entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::Aligner;
    use crate::sequence::{RawView, TokenView};

    fn entity(start: usize, end: usize, label: &str) -> Entity {
        Entity::new(start, end, label).unwrap()
    }

    fn tokens(items: &[&str]) -> TokenView {
        TokenView::from_tokens(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_iob2_character_tags() {
        let view = RawView::new("New York");
        let tags = TagScheme::Iob2.tags(&view, &[entity(0, 7, "LOC")]).unwrap();
        assert_eq!(tags[0], "B-LOC");
        assert!(tags[1..].iter().all(|tag| tag == "I-LOC"));
    }

    #[test]
    fn test_iob2_unit_span() {
        let view = tokens(&["Go", "to", "Rome"]);
        let output = Iob2Serializer.save(&view, &[entity(6, 9, "LOC")]).unwrap();
        assert_eq!(output, "Go\tO\nto\tO\nRome\tB-LOC");
    }

    #[test]
    fn test_iob2_adjacent_entities() {
        let view = tokens(&["Anna", "Bob", "Carl"]);
        let tags = TagScheme::Iob2
            .tags(&view, &[entity(0, 3, "PER"), entity(5, 7, "PER")])
            .unwrap();
        assert_eq!(tags, vec!["B-PER", "B-PER", "O"]);
    }

    #[test]
    fn test_bilou_shapes() {
        let view = tokens(&["The", "United", "Nations", "met", "in", "Geneva", "today"]);
        // "The United Nations met in Geneva today"
        let tags = TagScheme::Bilou
            .tags(&view, &[entity(0, 17, "ORG"), entity(26, 31, "LOC")])
            .unwrap();
        assert_eq!(
            tags,
            vec!["B-ORG", "I-ORG", "L-ORG", "O", "O", "U-LOC", "O"]
        );
    }

    #[test]
    fn test_bilou_two_units_has_no_inside() {
        let view = tokens(&["New", "York"]);
        let output = BilouSerializer.save(&view, &[entity(0, 7, "LOC")]).unwrap();
        assert_eq!(output, "New\tB-LOC\nYork\tL-LOC");
    }

    #[test]
    fn test_overlap_aborts_whole_call() {
        let view = RawView::new("abcdefg");
        let entities = vec![entity(0, 3, "A"), entity(3, 5, "B")];
        for scheme in [TagScheme::Iob2, TagScheme::Bilou] {
            assert_eq!(
                scheme.save(&view, &entities),
                Err(CoreError::OverlappingSpans { start: 3, end: 5 })
            );
        }
    }

    #[test]
    fn test_duplicate_entity_is_overlap() {
        let view = RawView::new("ab");
        let entities = vec![entity(0, 0, "A"), entity(0, 0, "A")];
        assert!(matches!(
            Iob2Serializer.save(&view, &entities),
            Err(CoreError::OverlappingSpans { .. })
        ));
    }

    #[test]
    fn test_unaligned_entity_aborts() {
        let view = tokens(&["Paris"]);
        assert_eq!(
            BilouSerializer.save(&view, &[entity(0, 2, "LOC")]),
            Err(CoreError::InvalidOffset { start: 0, end: 2 })
        );
    }

    struct FixedAligner(Vec<Vec<usize>>);

    impl Aligner for FixedAligner {
        fn align(&self, _tokens: &[String], _text: &str) -> Vec<Vec<usize>> {
            self.0.clone()
        }
    }

    #[test]
    fn test_shadowed_boundaries_are_rejected() {
        let aligner = FixedAligner(vec![vec![0, 1], vec![1, 2]]);
        let view = TokenView::with_aligner(
            vec!["ab".into(), "bc".into()],
            vec![false, false],
            &aligner,
        )
        .unwrap();
        let entities = vec![entity(1, 1, "X")];
        for scheme in [TagScheme::Iob2, TagScheme::Bilou] {
            assert_eq!(
                scheme.save(&view, &entities),
                Err(CoreError::InvalidOffset { start: 1, end: 1 })
            );
        }
    }

    #[test]
    fn test_scheme_display() {
        assert_eq!(TagScheme::Iob2.to_string(), "IOB2");
        assert_eq!(TagScheme::Bilou.to_string(), "BILOU");
    }

    #[test]
    fn test_empty_view() {
        let view = RawView::new("");
        assert_eq!(Iob2Serializer.save(&view, &[]).unwrap(), "");
    }
}
