//! item-processor CLI
//!
//! Lowercases, sorts and prints the given items (or a built-in demo list).

use anyhow::{Context, Result};
use clap::Parser;
use item_processor::Processor;
use tracing::info;

const DEMO_ITEMS: [&str; 3] = ["Apple", "Banana", "Cherry"];

#[derive(Parser)]
#[command(name = "item-processor", version)]
#[command(about = "Lowercase, sort and print a list of items")]
struct Cli {
    /// Items to process (defaults to Apple Banana Cherry)
    items: Vec<String>,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries processed items
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut processor = if cli.items.is_empty() {
        info!("no items given, using demo input");
        Processor::new(DEMO_ITEMS)
    } else {
        Processor::new(cli.items)
    };

    processor.run().context("failed to write processed items")?;

    Ok(())
}
