//! JSON-lines serializer

use super::Serializer;
use crate::entity::Entity;
use crate::error::Result;
use crate::sequence::StringSequence;
use serde::Serialize;

/// Emits `{"text": [unit, ...], "tags": [...]}` on a single line.
///
/// Tag offsets are aligned view indices. Overlapping entities are allowed.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonlSerializer;

#[derive(Serialize)]
struct Record<'a> {
    text: Vec<&'a str>,
    tags: Vec<Tag<'a>>,
}

#[derive(Serialize)]
struct Tag<'a> {
    start_offset: usize,
    end_offset: usize,
    label: &'a str,
}

impl Serializer for JsonlSerializer {
    fn save(&self, text: &dyn StringSequence, entities: &[Entity]) -> Result<String> {
        let tags = entities
            .iter()
            .map(|entity| {
                let (start_offset, end_offset) =
                    text.align_offset(entity.start_offset(), entity.end_offset())?;
                Ok(Tag {
                    start_offset,
                    end_offset,
                    label: entity.label(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let record = Record {
            text: text.units().collect(),
            tags,
        };
        Ok(serde_json::to_string(&record)?)
    }
}
