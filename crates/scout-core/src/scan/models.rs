//! The persisted scan record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::architecture::ArchitectureSummary;
use crate::documentation::DocumentationSummary;
use crate::workspace::models::{
    DependencyCategories, DirectoryEntry, KeyFile, PackageManager, ProjectType,
};

/// Version written into every new scan
pub const SCAN_FORMAT_VERSION: &str = "1.0.0";

/// Headline facts about the project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOverview {
    pub summary: String,
    pub project_type: ProjectType,
    /// Ranked by total lines
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_manager: Option<PackageManager>,
    pub total_files: usize,
    pub total_lines: usize,
}

impl ProjectOverview {
    /// Fallback summary when the architecture has no description:
    /// `"{type} project using {top three languages}"`
    pub fn default_summary(project_type: ProjectType, languages: &[String]) -> String {
        if languages.is_empty() {
            format!("{} project", project_type)
        } else {
            let top: Vec<&str> = languages.iter().take(3).map(String::as_str).collect();
            format!("{} project using {}", project_type, top.join(", "))
        }
    }
}

/// Declared dependencies merged across every root manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_manager: Option<PackageManager>,
    #[serde(flatten)]
    pub categories: DependencyCategories,
}

impl DependencyReport {
    pub fn total(&self) -> usize {
        self.categories.runtime.len()
            + self.categories.development.len()
            + self.categories.peer.len()
    }
}

/// One end-to-end scan of a project; the unit of caching
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectScan {
    pub version: String,
    pub scanned_at: DateTime<Utc>,
    pub project_id: String,
    pub project_name: String,
    pub project_path: String,
    pub overview: ProjectOverview,
    pub directory_structure: Vec<DirectoryEntry>,
    pub key_files: Vec<KeyFile>,
    pub documentation: DocumentationSummary,
    pub dependencies: DependencyReport,
    pub architecture: ArchitectureSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_summary() {
        let languages = vec![
            "TypeScript".to_string(),
            "JSON".to_string(),
            "CSS".to_string(),
            "HTML".to_string(),
        ];
        assert_eq!(
            ProjectOverview::default_summary(ProjectType::WebApp, &languages),
            "web-app project using TypeScript, JSON, CSS"
        );
        assert_eq!(
            ProjectOverview::default_summary(ProjectType::Other, &[]),
            "other project"
        );
    }

    #[test]
    fn test_dependency_report_is_flat() {
        let report = DependencyReport {
            package_manager: Some(PackageManager::Cargo),
            categories: DependencyCategories::default(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["packageManager"], "cargo");
        assert!(json["runtime"].is_array());
        assert!(json.get("categories").is_none());
        assert_eq!(report.total(), 0);
    }
}
