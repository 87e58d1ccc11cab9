//! Record conversion and validation

use crate::input::record::AnnotatedRecord;
use anyhow::Result;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use tagalign_core::{
    Entity, EntityFilter, Format, LongestMatchFilter, NoFilter, StringSequence, ViewKind,
};

/// Overlap resolution applied before serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum FilterKind {
    /// Keep the longest of overlapping entities
    #[default]
    #[serde(rename = "longest")]
    #[value(name = "longest")]
    LongestMatch,
    /// Keep entities as annotated
    #[serde(rename = "none")]
    #[value(name = "none")]
    Disabled,
}

impl FilterKind {
    /// Filter implementation for this kind
    pub fn filter(&self) -> &'static dyn EntityFilter {
        match self {
            FilterKind::LongestMatch => &LongestMatchFilter,
            FilterKind::Disabled => &NoFilter,
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterKind::LongestMatch => write!(f, "longest"),
            FilterKind::Disabled => write!(f, "none"),
        }
    }
}

/// Converts records into output documents
#[derive(Debug, Clone, Copy)]
pub struct Converter {
    format: Format,
    view: ViewKind,
    filter: FilterKind,
}

impl Converter {
    /// Create a converter
    pub fn new(format: Format, view: ViewKind, filter: FilterKind) -> Self {
        Self {
            format,
            view,
            filter,
        }
    }

    /// Convert one record
    pub fn convert(&self, record: &AnnotatedRecord) -> Result<String> {
        let view = record.view(self.view)?;
        let entities = self.filter.filter().filter(&record.entities);
        if entities.len() < record.entities.len() {
            log::debug!(
                "dropped {} overlapping entities",
                record.entities.len() - entities.len()
            );
        }
        Ok(self.format.save(&view, &entities)?)
    }

    /// Convert records in parallel, keeping input order
    pub fn convert_all<R>(&self, records: &[R]) -> Vec<Result<String>>
    where
        R: AsRef<AnnotatedRecord> + Sync,
    {
        records
            .par_iter()
            .map(|record| self.convert(record.as_ref()))
            .collect()
    }

    /// Find every problem that would stop `record` from converting
    pub fn check(&self, record: &AnnotatedRecord) -> Vec<Problem> {
        let view = match record.view(self.view) {
            Ok(view) => view,
            Err(e) => return vec![Problem::BrokenRecord(format!("{e:#}"))],
        };
        let entities = self.filter.filter().filter(&record.entities);

        let mut problems = Vec::new();
        let mut aligned: Vec<(usize, usize, &Entity)> = Vec::with_capacity(entities.len());
        for entity in &entities {
            match view.align_offset(entity.start_offset(), entity.end_offset()) {
                Ok((start, end)) => aligned.push((start, end, entity)),
                Err(_) => problems.push(Problem::InvalidOffset(entity.clone())),
            }
        }

        // JSON lines carry overlapping tags as-is
        if self.format.is_tag_format() {
            for (i, (start, end, first)) in aligned.iter().enumerate() {
                for (other_start, other_end, second) in &aligned[i + 1..] {
                    if start <= other_end && other_start <= end {
                        problems.push(Problem::Overlap((*first).clone(), (*second).clone()));
                    }
                }
            }
        }

        problems
    }

    /// Check records in parallel, keeping input order
    pub fn check_all<R>(&self, records: &[R]) -> Vec<Vec<Problem>>
    where
        R: AsRef<AnnotatedRecord> + Sync,
    {
        records
            .par_iter()
            .map(|record| self.check(record.as_ref()))
            .collect()
    }
}

/// A reason a record cannot be converted
#[derive(Debug, Clone, PartialEq)]
pub enum Problem {
    /// The view could not be built
    BrokenRecord(String),
    /// Entity does not align to the view
    InvalidOffset(Entity),
    /// Two entities claim the same unit
    Overlap(Entity, Entity),
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::BrokenRecord(reason) => write!(f, "broken record: {reason}"),
            Problem::InvalidOffset(entity) => write!(f, "entity {entity} does not align"),
            Problem::Overlap(first, second) => write!(f, "entities {first} and {second} overlap"),
        }
    }
}
