//! File reading utilities

use super::record::{AnnotatedRecord, SourcedRecord};
use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reader for JSON-lines annotation files
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Parse every non-blank line of `path` as an [`AnnotatedRecord`]
    pub fn read_records(path: &Path) -> Result<Vec<SourcedRecord>> {
        let content = Self::read_text(path)?;
        let mut records = Vec::new();

        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record: AnnotatedRecord =
                serde_json::from_str(line).map_err(|e| CliError::InvalidRecord {
                    path: path.to_path_buf(),
                    line: index + 1,
                    reason: e.to_string(),
                })?;
            records.push(SourcedRecord {
                path: path.to_path_buf(),
                line: index + 1,
                record,
            });
        }

        log::debug!("Read {} record(s) from {}", records.len(), path.display());
        Ok(records)
    }
}
