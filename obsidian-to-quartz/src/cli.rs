// src/cli.rs
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use crate::core::converter::{ConvertConfig, convert};
use crate::models::ConversionStats;

/// Copy an Obsidian vault into a Quartz site's content folder.
///
/// Hidden folders are skipped, paths listed in `.obsidian-to-quartz-ignore`
/// are excluded, only `.svg` files are kept from Excalidraw folders, and
/// Excalidraw links in markdown are pointed at the exported SVGs.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Obsidian vault to copy from
    #[arg(value_name = "OBSIDIAN_FOLDER")]
    pub obsidian_folder: PathBuf,

    /// Quartz site root; files land in its `content` folder
    #[arg(value_name = "QUARTZ_FOLDER")]
    pub quartz_folder: PathBuf,
}

/// Runs one conversion from parsed arguments.
///
/// # Errors
///
/// Returns the first setup or traversal error encountered.
pub fn run(args: Args) -> Result<ConversionStats> {
    let config = ConvertConfig::load(args.obsidian_folder, &args.quartz_folder)?;
    let stats = convert(&config)?;

    info!(
        "Written {} files ({} markdown), skipped {} entries",
        stats.files_written(),
        stats.markdown_processed,
        stats.skipped()
    );
    info!("Conversion completed successfully!");
    Ok(stats)
}
