//! tagalign CLI library
//!
//! This library provides the command-line interface for converting
//! span-annotated documents into sequence-labeling formats.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod progress;

pub use error::{CliError, CliResult};
