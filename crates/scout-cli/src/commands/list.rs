//! `scout list`

use colored::*;
use scout_core::{FileScanStorage, ScanStorage};

use crate::console::CliConsole;

pub async fn execute(storage: &FileScanStorage, verbose: bool) -> anyhow::Result<()> {
    let console = CliConsole::new(verbose);
    let ids = storage.list().await?;

    if ids.is_empty() {
        console.warn("No stored scans");
        return Ok(());
    }

    console.print_header("Stored Scans");
    for id in ids {
        match storage.load(&id).await {
            Some(scan) => println!(
                "  {}  {}  {}",
                id.cyan(),
                scan.scanned_at.format("%Y-%m-%d %H:%M").to_string().dimmed(),
                scan.project_path
            ),
            None => println!("  {}  {}", id.cyan(), "(unreadable)".yellow()),
        }
    }
    Ok(())
}
