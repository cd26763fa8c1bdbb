// src/core/converter/writer.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

use crate::core::rewrite::rewrite_links;

fn ensure_parent_dir(dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create destination directory: {}", parent.display())
        })?;
    }
    Ok(())
}

/// Rewrites Excalidraw links in `src` and writes the result to `dest`.
///
/// The destination keeps the source file's permission bits.
///
/// # Errors
///
/// Returns an error if the source cannot be read or the destination cannot be
/// created, written, or given the source permissions.
pub fn process_markdown_file(src: &Path, dest: &Path) -> Result<()> {
    let content = fs::read(src)
        .with_context(|| format!("Failed to read markdown file: {}", src.display()))?;
    let permissions = fs::metadata(src)
        .with_context(|| format!("Failed to stat markdown file: {}", src.display()))?
        .permissions();

    ensure_parent_dir(dest)?;

    fs::write(dest, rewrite_links(&content))
        .with_context(|| format!("Failed to write markdown file: {}", dest.display()))?;
    fs::set_permissions(dest, permissions)
        .with_context(|| format!("Failed to set permissions on: {}", dest.display()))?;

    Ok(())
}

/// Copies `src` to `dest` byte for byte, keeping permission bits.
///
/// # Errors
///
/// Returns an error if the destination directory cannot be created or the
/// copy fails.
pub fn copy_file(src: &Path, dest: &Path) -> Result<()> {
    ensure_parent_dir(dest)?;

    fs::copy(src, dest).with_context(|| {
        format!(
            "Failed to copy file: {} -> {}",
            src.display(),
            dest.display()
        )
    })?;

    Ok(())
}
