//! Overlap resolution for entity lists

use crate::entity::Entity;
use std::cmp::Reverse;

/// Whether two entities share at least one offset
pub fn overlap(a: &Entity, b: &Entity) -> bool {
    a.overlaps(b)
}

/// Selects a subset of entities
pub trait EntityFilter {
    /// Filter `entities`, returning the kept ones
    fn filter(&self, entities: &[Entity]) -> Vec<Entity>;
}

/// Keeps every entity unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFilter;

impl EntityFilter for NoFilter {
    fn filter(&self, entities: &[Entity]) -> Vec<Entity> {
        entities.to_vec()
    }
}

/// Removes overlaps, preferring longer entities.
///
/// Entities are visited longest first (ties keep input order) and accepted
/// when they overlap nothing accepted so far. The result is sorted by start
/// offset. This is a greedy pass: it does not maximise total coverage or
/// entity count.
#[derive(Debug, Clone, Copy, Default)]
pub struct LongestMatchFilter;

impl EntityFilter for LongestMatchFilter {
    fn filter(&self, entities: &[Entity]) -> Vec<Entity> {
        let mut candidates: Vec<&Entity> = entities.iter().collect();
        // Stable: equal lengths stay in input order
        candidates.sort_by_key(|entity| Reverse(entity.len()));

        let mut kept: Vec<Entity> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if let Some(blocker) = kept.iter().find(|prev| overlap(candidate, prev)) {
                log::debug!("dropping {candidate}: overlaps {blocker}");
                continue;
            }
            kept.push(candidate.clone());
        }

        kept.sort_by_key(Entity::start_offset);
        kept
    }
}
