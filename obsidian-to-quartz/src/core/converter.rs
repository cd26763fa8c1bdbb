// src/core/converter.rs
mod writer;

use anyhow::{Context as _, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::core::ignore::{Patterns, load_ignore_patterns, should_exclude};
use crate::models::ConversionStats;
use crate::utils::{has_suffix, is_hidden, is_in_excalidraw_folder};

pub use writer::{copy_file, process_markdown_file};

/// Subfolder of the destination root that receives the mirrored tree.
pub const CONTENT_FOLDER: &str = "content";

/// Run-scoped settings handed to [`convert`].
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub source: PathBuf,
    pub content_dir: PathBuf,
    pub patterns: Patterns,
}

impl ConvertConfig {
    #[inline]
    #[must_use]
    pub fn new(source: impl Into<PathBuf>, destination: &Path, patterns: Patterns) -> Self {
        Self {
            source: source.into(),
            content_dir: destination.join(CONTENT_FOLDER),
            patterns,
        }
    }

    /// Builds a config, reading exclusion patterns from the source root.
    ///
    /// # Errors
    ///
    /// Returns an error if the ignore file exists but cannot be read.
    #[inline]
    pub fn load(source: impl Into<PathBuf>, destination: &Path) -> Result<Self> {
        let source = source.into();
        let patterns = load_ignore_patterns(&source)?;
        if !patterns.is_empty() {
            info!("Loaded {} exclusion patterns", patterns.len());
        }
        for pattern in patterns.iter() {
            debug!(
                "Exclusion pattern: {} (folders only: {})",
                pattern.as_str(),
                pattern.is_dir_only()
            );
        }
        Ok(Self::new(source, destination, patterns))
    }
}

/// What the walker does with one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// The source root itself.
    Root,
    PruneHidden,
    PruneExcluded,
    SkipExcluded,
    CreateDir,
    /// Non-SVG file inside an Excalidraw folder.
    SkipExcalidraw,
    RewriteMarkdown,
    Copy,
}

/// Decides the fate of an entry from its path relative to the source root.
///
/// Rules apply in a fixed order: hidden directories first, then exclusion
/// patterns, then the Excalidraw and markdown file rules.
#[must_use]
pub fn classify(rel_path: &Path, is_dir: bool, patterns: &Patterns) -> Visit {
    let Some(name) = rel_path.file_name() else {
        return Visit::Root;
    };

    if is_dir && is_hidden(name) {
        return Visit::PruneHidden;
    }

    if should_exclude(rel_path, patterns, is_dir) {
        return if is_dir {
            Visit::PruneExcluded
        } else {
            Visit::SkipExcluded
        };
    }

    if is_dir {
        return Visit::CreateDir;
    }

    if is_in_excalidraw_folder(rel_path) && !has_suffix(name, ".svg") {
        return Visit::SkipExcalidraw;
    }

    if has_suffix(name, ".md") {
        Visit::RewriteMarkdown
    } else {
        Visit::Copy
    }
}

/// Mirrors the source tree into the content folder.
///
/// Entries are visited depth first in file-name order. The first I/O error
/// aborts the run; files already written are left in place.
///
/// # Errors
///
/// Returns an error if the content folder cannot be created, or if any read,
/// write, stat or directory creation fails during the walk.
pub fn convert(config: &ConvertConfig) -> Result<ConversionStats> {
    fs::create_dir_all(&config.content_dir).with_context(|| {
        format!(
            "Failed to create content folder: {}",
            config.content_dir.display()
        )
    })?;

    let mut stats = ConversionStats::new();
    // Sorting makes walkdir read a folder's listing as it is yielded, so a
    // pruned folder costs one readdir; skip_current_dir stops any descent.
    let mut walker = WalkDir::new(&config.source)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = walker.next() {
        let entry = entry
            .with_context(|| format!("Failed to walk folder: {}", config.source.display()))?;
        let path = entry.path();
        let rel_path = path.strip_prefix(&config.source).with_context(|| {
            format!("Failed to get relative path for: {}", path.display())
        })?;
        let is_dir = entry.file_type().is_dir();
        let dest = config.content_dir.join(rel_path);

        match classify(rel_path, is_dir, &config.patterns) {
            Visit::Root => {}
            Visit::PruneHidden => {
                debug!("Skipping hidden folder: {}", path.display());
                stats.hidden_dirs_skipped = stats.hidden_dirs_skipped.saturating_add(1);
                walker.skip_current_dir();
            }
            Visit::PruneExcluded => {
                debug!("Excluded folder: {}", path.display());
                stats.entries_excluded = stats.entries_excluded.saturating_add(1);
                walker.skip_current_dir();
            }
            Visit::SkipExcluded => {
                debug!("Excluded file: {}", path.display());
                stats.entries_excluded = stats.entries_excluded.saturating_add(1);
            }
            Visit::CreateDir => {
                if create_mirror_dir(path, &dest)? {
                    stats.directories_created = stats.directories_created.saturating_add(1);
                }
            }
            Visit::SkipExcalidraw => {
                debug!("Skipping non-SVG Excalidraw file: {}", path.display());
                stats.excalidraw_skipped = stats.excalidraw_skipped.saturating_add(1);
            }
            Visit::RewriteMarkdown => {
                process_markdown_file(path, &dest)?;
                info!("Processed: {} -> {}", path.display(), dest.display());
                stats.markdown_processed = stats.markdown_processed.saturating_add(1);
            }
            Visit::Copy => {
                copy_file(path, &dest)?;
                info!("Copied: {} -> {}", path.display(), dest.display());
                stats.files_copied = stats.files_copied.saturating_add(1);
            }
        }
    }

    Ok(stats)
}

/// Creates `dest` with the permission bits of `src` unless it already exists.
///
/// Returns whether the directory was created.
fn create_mirror_dir(src: &Path, dest: &Path) -> Result<bool> {
    if dest.is_dir() {
        return Ok(false);
    }

    let permissions = fs::metadata(src)
        .with_context(|| format!("Failed to stat folder: {}", src.display()))?
        .permissions();
    fs::create_dir_all(dest)
        .with_context(|| format!("Failed to create folder: {}", dest.display()))?;
    fs::set_permissions(dest, permissions)
        .with_context(|| format!("Failed to set permissions on: {}", dest.display()))?;

    Ok(true)
}
