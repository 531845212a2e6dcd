//! `scout delete`

use scout_core::{FileScanStorage, ScanStorage};

use crate::console::CliConsole;

pub async fn execute(storage: &FileScanStorage, id: &str) -> anyhow::Result<()> {
    let console = CliConsole::new(false);

    if !storage.exists(id).await {
        console.warn(&format!("No stored scan for '{}'", id));
        return Ok(());
    }

    storage.delete(id).await?;
    console.success(&format!("Deleted {}", id));
    Ok(())
}
