//! Scout CLI application
//!
//! Scans a project directory and keeps a persisted snapshot of its
//! languages, dependencies, documentation and architecture.
//!
//! # Installation
//!
//! ```bash
//! cargo install --path crates/scout-cli
//! ```
//!
//! # Commands
//!
//! - `scout scan [PATH]` runs a scan, reusing a stored one unless `--force`
//! - `scout show <ID>` prints a stored scan as markdown (or `--json`)
//! - `scout list` lists stored project IDs
//! - `scout delete <ID>` removes a stored scan

mod args;
mod commands;
mod completion;
mod console;
mod logging;
mod router;

use anyhow::Context;
use args::Cli;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = scout_core::load_config(cli.config.as_deref())
        .context("Failed to load configuration")?;
    logging::init(&config.logging, cli.verbose);

    router::route(cli, config).await
}
