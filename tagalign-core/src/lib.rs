//! Entity span alignment and sequence-labeling serializers
//!
//! Annotations arrive as labeled character spans over a document. Models
//! consume per-unit tag sequences over characters or tokens. This crate
//! bridges the two:
//!
//! - **Views**: [`RawView`] (characters) and [`TokenView`] (tokens with
//!   spacing flags) translate annotation offsets into unit indices
//! - **Filters**: [`LongestMatchFilter`] drops overlapping spans, longest
//!   first
//! - **Serializers**: JSON lines, IOB2 and BILOU
//!
//! # Example
//!
//! ```rust
//! use tagalign_core::{Entity, Format, LongestMatchFilter, EntityFilter, TokenView};
//!
//! let view = TokenView::new(
//!     vec!["I".into(), "love".into(), "New".into(), "York".into()],
//!     vec![true, true, true, false],
//! )
//! .unwrap();
//!
//! let entities = vec![
//!     Entity::new(7, 14, "LOC").unwrap(),
//!     Entity::new(7, 9, "LOC").unwrap(),
//! ];
//! let entities = LongestMatchFilter.filter(&entities);
//!
//! let output = Format::Bilou.save(&view, &entities).unwrap();
//! assert_eq!(output, "I\tO\nlove\tO\nNew\tB-LOC\nYork\tL-LOC");
//! ```

#![warn(missing_docs)]

pub mod alignment;
pub mod entity;
pub mod error;
pub mod filter;
pub mod sequence;
pub mod serializer;

pub use alignment::{Aligner, CharAligner};
pub use entity::Entity;
pub use error::{CoreError, Result};
pub use filter::{overlap, EntityFilter, LongestMatchFilter, NoFilter};
pub use sequence::{RawView, StringSequence, TextView, TokenView, ViewKind};
pub use serializer::{
    BilouSerializer, Format, Iob2Serializer, JsonlSerializer, Serializer, TagScheme,
};
