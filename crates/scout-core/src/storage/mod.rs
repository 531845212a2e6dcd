//! Scan persistence
//!
//! A scan is stored per project ID as `project.json` (the structured record)
//! plus a derived `project.md`. Loading doubles as the cache probe, so it
//! never fails: missing, corrupt or mis-shaped records read as absent.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::path::Path;

use crate::error::{ScoutError, ScoutResult};
use crate::scan::ProjectScan;

mod file_storage;
mod markdown;
mod memory_storage;
mod validation;


pub use file_storage::{FileScanStorage, MARKDOWN_FILE, SCAN_FILE};
pub use markdown::render_markdown;
pub use memory_storage::MemoryScanStorage;
pub use validation::{parse_scan, validate_scan_shape};

/// Storage backend for scans, keyed by project ID
#[async_trait]
pub trait ScanStorage: Send + Sync {
    /// Persist a scan, replacing any previous one for the same project
    async fn save(&self, scan: &ProjectScan) -> ScoutResult<()>;

    /// Load a scan; `None` when absent, unreadable or invalid
    async fn load(&self, project_id: &str) -> Option<ProjectScan>;

    /// Whether a scan is stored for the project
    async fn exists(&self, project_id: &str) -> bool;

    /// Stored project IDs, sorted ascending
    async fn list(&self) -> ScoutResult<Vec<String>>;

    /// Remove a stored scan; removing an absent one is not an error
    async fn delete(&self, project_id: &str) -> ScoutResult<()>;
}

/// Reject IDs that could escape the storage root
pub fn validate_project_id(project_id: &str) -> ScoutResult<()> {
    let invalid = project_id.trim().is_empty()
        || project_id.contains(['/', '\\', '\0'])
        || project_id.contains("..")
        || project_id == ".";

    if invalid {
        return Err(ScoutError::invalid_input_field(
            format!("Invalid project ID '{}'", project_id),
            "project_id",
        ));
    }
    Ok(())
}

/// Stable project ID for a directory: slugified directory name plus the
/// first 8 hex digits of the SHA-256 of its canonical path
pub fn project_id_for_path(path: &Path) -> String {
    let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    let name = canonical
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let digest = Sha256::digest(canonical.to_string_lossy().as_bytes());
    let hash: String = digest[..4].iter().map(|b| format!("{:02x}", b)).collect();

    format!("{}-{}", slugify(&name), hash)
}

fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');

    if slug.is_empty() {
        "project".to_string()
    } else {
        slug.to_string()
    }
}
