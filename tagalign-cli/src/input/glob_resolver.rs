//! Input pattern resolution using glob

use crate::error::CliError;
use anyhow::Result;
use glob::glob;
use std::path::{Path, PathBuf};

/// Resolve file patterns to existing files, sorted and deduplicated.
///
/// A pattern without glob metacharacters names a single file and must
/// exist. A glob pattern may match nothing on its own, but the patterns
/// together must match at least one file.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        if !is_glob(pattern) {
            let path = Path::new(pattern);
            if !path.is_file() {
                return Err(CliError::FileNotFound(pattern.clone()).into());
            }
            files.push(path.to_path_buf());
            continue;
        }

        let paths = glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern}: {e}")))?;
        let before = files.len();
        for entry in paths {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(_) => {}
                Err(e) => log::warn!("Skipping unreadable path: {e}"),
            }
        }
        log::debug!("Pattern {pattern} matched {} file(s)", files.len() - before);
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    files.sort();
    files.dedup();

    Ok(files)
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}
