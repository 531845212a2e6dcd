//! `scout show`

use anyhow::bail;
use scout_core::storage::{MARKDOWN_FILE, render_markdown};
use scout_core::{FileScanStorage, ScanStorage};

pub async fn execute(storage: &FileScanStorage, id: &str, json: bool) -> anyhow::Result<()> {
    let Some(scan) = storage.load(id).await else {
        bail!("No stored scan for '{}'. Run `scout list` to see stored projects.", id);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&scan)?);
        return Ok(());
    }

    // Prefer the stored markdown; regenerate when it is missing
    let path = storage.project_dir(id).join(MARKDOWN_FILE);
    let markdown = match tokio::fs::read_to_string(&path).await {
        Ok(markdown) => markdown,
        Err(e) => {
            tracing::debug!("Rendering markdown for {}: {}", id, e);
            render_markdown(&scan)
        }
    };
    print!("{}", markdown);
    Ok(())
}
