// src/core/ignore/loader.rs
use crate::core::ignore::Patterns;
use anyhow::{Context as _, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// File name of the ignore list, looked up directly under the source root.
pub const IGNORE_FILE_NAME: &str = ".obsidian-to-quartz-ignore";

/// Loads exclusion patterns from the ignore file in `dir`.
///
/// Only `dir` itself is consulted; parent directories are not searched.
/// A missing file yields an empty pattern set.
///
/// # Errors
///
/// Returns an error if the ignore file exists but cannot be read.
#[inline]
pub fn load_ignore_patterns(dir: &Path) -> Result<Patterns> {
    let ignore_file = dir.join(IGNORE_FILE_NAME);

    let content = match fs::read(&ignore_file) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Patterns::new()),
        Err(err) => {
            return Err(err).with_context(|| {
                format!("Failed to read ignore file: {}", ignore_file.display())
            });
        }
    };

    let mut patterns = Patterns::new();
    for line in String::from_utf8_lossy(&content).lines() {
        patterns.add_pattern(line);
    }

    Ok(patterns)
}
