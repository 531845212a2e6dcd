//! In-memory scan storage

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::{ScanStorage, validate_project_id};
use crate::error::ScoutResult;
use crate::scan::ProjectScan;

/// In-process storage for tests and embedding; one instance per cache scope
#[derive(Default)]
pub struct MemoryScanStorage {
    scans: RwLock<HashMap<String, ProjectScan>>,
}

impl MemoryScanStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScanStorage for MemoryScanStorage {
    async fn save(&self, scan: &ProjectScan) -> ScoutResult<()> {
        validate_project_id(&scan.project_id)?;
        let mut scans = self.scans.write().await;
        scans.insert(scan.project_id.clone(), scan.clone());
        Ok(())
    }

    async fn load(&self, project_id: &str) -> Option<ProjectScan> {
        let scans = self.scans.read().await;
        scans.get(project_id).cloned()
    }

    async fn exists(&self, project_id: &str) -> bool {
        let scans = self.scans.read().await;
        scans.contains_key(project_id)
    }

    async fn list(&self) -> ScoutResult<Vec<String>> {
        let scans = self.scans.read().await;
        let mut ids: Vec<String> = scans.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }

    async fn delete(&self, project_id: &str) -> ScoutResult<()> {
        validate_project_id(project_id)?;
        let mut scans = self.scans.write().await;
        scans.remove(project_id);
        Ok(())
    }
}
