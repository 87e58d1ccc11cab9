//! Output serializers
//!
//! Every serializer aligns each entity against the view itself; entity
//! offsets are never assumed to be in view space already. A failed
//! alignment or an overlap aborts the whole call and no output is produced.

mod json;
mod tags;

pub use json::JsonlSerializer;
pub use tags::{BilouSerializer, Iob2Serializer, TagScheme, OUTSIDE};

use crate::entity::Entity;
use crate::error::Result;
use crate::sequence::StringSequence;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Turns a view and its entities into one output document
pub trait Serializer: Send + Sync {
    /// Serialize `entities` over `text`
    fn save(&self, text: &dyn StringSequence, entities: &[Entity]) -> Result<String>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// One JSON object per document
    Jsonl,
    /// `unit<TAB>tag` lines with B/I/O tags
    #[default]
    Iob2,
    /// `unit<TAB>tag` lines with B/I/L/O/U tags
    Bilou,
}

impl Format {
    /// All formats
    pub const ALL: [Format; 3] = [Format::Jsonl, Format::Iob2, Format::Bilou];

    /// Lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Format::Jsonl => "jsonl",
            Format::Iob2 => "iob2",
            Format::Bilou => "bilou",
        }
    }

    /// Whether the format rejects overlapping entities
    pub fn is_tag_format(&self) -> bool {
        !matches!(self, Format::Jsonl)
    }

    /// Boxed serializer for this format
    pub fn serializer(&self) -> Box<dyn Serializer> {
        match self {
            Format::Jsonl => Box::new(JsonlSerializer),
            Format::Iob2 => Box::new(Iob2Serializer),
            Format::Bilou => Box::new(BilouSerializer),
        }
    }

    /// Serialize with this format
    pub fn save(&self, text: &dyn StringSequence, entities: &[Entity]) -> Result<String> {
        match self {
            Format::Jsonl => JsonlSerializer.save(text, entities),
            Format::Iob2 => TagScheme::Iob2.save(text, entities),
            Format::Bilou => TagScheme::Bilou.save(text, entities),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jsonl" | "json" => Ok(Format::Jsonl),
            "iob2" | "bio" => Ok(Format::Iob2),
            "bilou" => Ok(Format::Bilou),
            other => Err(format!("unknown format '{other}'")),
        }
    }
}
