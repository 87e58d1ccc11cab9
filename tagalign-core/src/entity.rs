//! Labeled character spans

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A labeled span `[start_offset, end_offset]` in raw-character space.
///
/// Both offsets are inclusive and count Unicode scalar values of the
/// annotated text. `start_offset <= end_offset` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EntityRecord")]
pub struct Entity {
    start_offset: usize,
    end_offset: usize,
    label: String,
}

/// Unchecked wire form of [`Entity`]
#[derive(Deserialize)]
struct EntityRecord {
    start_offset: usize,
    end_offset: usize,
    label: String,
}

impl TryFrom<EntityRecord> for Entity {
    type Error = CoreError;

    fn try_from(record: EntityRecord) -> Result<Self> {
        Entity::new(record.start_offset, record.end_offset, record.label)
    }
}

impl Entity {
    /// Create an entity, rejecting `start_offset > end_offset`
    pub fn new(start_offset: usize, end_offset: usize, label: impl Into<String>) -> Result<Self> {
        if start_offset > end_offset {
            return Err(CoreError::InvalidSpan {
                start: start_offset,
                end: end_offset,
            });
        }
        Ok(Self {
            start_offset,
            end_offset,
            label: label.into(),
        })
    }

    /// First covered offset
    pub fn start_offset(&self) -> usize {
        self.start_offset
    }

    /// Last covered offset
    pub fn end_offset(&self) -> usize {
        self.end_offset
    }

    /// Entity label, e.g. `LOC`
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of covered offsets; never zero
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.end_offset - self.start_offset + 1
    }

    /// Closed-interval intersection test
    pub fn overlaps(&self, other: &Entity) -> bool {
        self.start_offset <= other.end_offset && other.start_offset <= self.end_offset
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}, {}]", self.label, self.start_offset, self.end_offset)
    }
}
