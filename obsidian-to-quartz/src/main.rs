// src/main.rs
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

use obsidian_to_quartz::cli::{Args, run};

fn setup_tracing() {
    use tracing_subscriber::fmt;

    tracing_subscriber::registry()
        .with(fmt::layer().without_time().with_target(false))
        .with(EnvFilter::new("info"))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_tracing();
    run(args)?;
    Ok(())
}
