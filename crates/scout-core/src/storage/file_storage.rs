//! File-based scan storage

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::markdown::render_markdown;
use super::validation::parse_scan;
use super::{ScanStorage, validate_project_id};
use crate::error::{ScoutError, ScoutResult};
use crate::scan::ProjectScan;

/// Structured scan record
pub const SCAN_FILE: &str = "project.json";
/// Rendered markdown view
pub const MARKDOWN_FILE: &str = "project.md";

/// File-based scan storage
///
/// ```text
/// base_path/
///   {project_id}/
///     project.json
///     project.md
/// ```
pub struct FileScanStorage {
    base_path: PathBuf,
}

impl FileScanStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Directory holding one project's files
    pub fn project_dir(&self, project_id: &str) -> PathBuf {
        self.base_path.join(project_id)
    }

    fn scan_path(&self, project_id: &str) -> PathBuf {
        self.project_dir(project_id).join(SCAN_FILE)
    }

    /// Write via a sibling `.tmp` file and rename into place
    async fn write_atomic(path: &Path, content: &str) -> ScoutResult<()> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let tmp = path.with_file_name(format!("{}.tmp", file_name));

        fs::write(&tmp, content).await.map_err(|e| {
            ScoutError::storage(format!("Failed to write {}: {}", tmp.display(), e))
        })?;
        fs::rename(&tmp, path).await.map_err(|e| {
            ScoutError::storage(format!("Failed to move {} into place: {}", path.display(), e))
        })?;
        Ok(())
    }
}

#[async_trait]
impl ScanStorage for FileScanStorage {
    async fn save(&self, scan: &ProjectScan) -> ScoutResult<()> {
        validate_project_id(&scan.project_id)?;

        let dir = self.project_dir(&scan.project_id);
        fs::create_dir_all(&dir).await.map_err(|e| {
            ScoutError::storage(format!("Failed to create {}: {}", dir.display(), e))
        })?;

        let json = serde_json::to_string_pretty(scan)
            .map_err(|e| ScoutError::storage(format!("Failed to serialize scan: {}", e)))?;
        Self::write_atomic(&dir.join(SCAN_FILE), &json).await?;
        Self::write_atomic(&dir.join(MARKDOWN_FILE), &render_markdown(scan)).await?;

        tracing::debug!("Saved scan {} to {}", scan.project_id, dir.display());
        Ok(())
    }

    async fn load(&self, project_id: &str) -> Option<ProjectScan> {
        if validate_project_id(project_id).is_err() {
            return None;
        }

        let path = self.scan_path(project_id);
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!("No readable scan at {}: {}", path.display(), e);
                return None;
            }
        };
        parse_scan(&content)
    }

    async fn exists(&self, project_id: &str) -> bool {
        validate_project_id(project_id).is_ok()
            && fs::try_exists(self.scan_path(project_id))
                .await
                .unwrap_or(false)
    }

    async fn list(&self) -> ScoutResult<Vec<String>> {
        let mut entries = match fs::read_dir(&self.base_path).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(ScoutError::storage(format!(
                    "Failed to read storage directory: {}",
                    e
                )));
            }
        };

        let mut ids = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ScoutError::storage(format!("Failed to read directory entry: {}", e)))?
        {
            let id = entry.file_name().to_string_lossy().to_string();
            if validate_project_id(&id).is_ok() && entry.path().join(SCAN_FILE).is_file() {
                ids.push(id);
            }
        }

        ids.sort();
        Ok(ids)
    }

    async fn delete(&self, project_id: &str) -> ScoutResult<()> {
        validate_project_id(project_id)?;

        let dir = self.project_dir(project_id);
        match fs::remove_dir_all(&dir).await {
            Ok(()) => {
                tracing::debug!("Deleted scan {}", project_id);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ScoutError::storage(format!(
                "Failed to delete {}: {}",
                dir.display(),
                e
            ))),
        }
    }
}
