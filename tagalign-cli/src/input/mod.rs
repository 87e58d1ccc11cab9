//! Input handling: pattern resolution and annotation records

pub mod file_reader;
pub mod glob_resolver;
pub mod record;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;
pub use record::{AnnotatedRecord, SourcedRecord};
