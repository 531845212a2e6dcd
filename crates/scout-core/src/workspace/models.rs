//! Data models shared by the scanner, classifier and dependency parsers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Metadata for a single scanned file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Path relative to the scan root, `/`-separated
    pub path: String,
    /// File name including extension
    pub name: String,
    /// Lowercased extension without the dot (empty when absent)
    pub extension: String,
    /// Size on disk in bytes
    pub size_bytes: u64,
    /// Last modification time
    pub modified_at: DateTime<Utc>,
    /// Number of `\n`-delimited segments, set for small text files only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_count: Option<usize>,
    /// Language derived from the extension
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl FileRecord {
    /// Top-level path segment, or `None` for files directly under the root
    pub fn top_level_dir(&self) -> Option<&str> {
        self.path.split_once('/').map(|(head, _)| head)
    }
}

/// One top-level subdirectory of the project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEntry {
    pub path: String,
    pub purpose: String,
    pub file_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_language: Option<String>,
}

/// Category of a key file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyFileCategory {
    EntryPoint,
    Config,
    BuildConfig,
    Documentation,
    TestSetup,
    Schema,
}

impl KeyFileCategory {
    /// Serialized name, also used in rendered output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EntryPoint => "entry-point",
            Self::Config => "config",
            Self::BuildConfig => "build-config",
            Self::Documentation => "documentation",
            Self::TestSetup => "test-setup",
            Self::Schema => "schema",
        }
    }
}

impl fmt::Display for KeyFileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structurally significant file. The same path may appear more than once
/// when several rules match it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyFile {
    pub path: String,
    pub reason: String,
    pub category: KeyFileCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Inferred kind of project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    Cli,
    WebApp,
    ApiServer,
    DesktopApp,
    Library,
    Documentation,
    Other,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cli => "cli",
            Self::WebApp => "web-app",
            Self::ApiServer => "api-server",
            Self::DesktopApp => "desktop-app",
            Self::Library => "library",
            Self::Documentation => "documentation",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single declared dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

impl DependencyEntry {
    pub fn new(name: impl Into<String>, version: Option<String>) -> Self {
        Self {
            name: name.into(),
            version,
            purpose: None,
        }
    }
}

/// Dependencies grouped by how they are used
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyCategories {
    #[serde(default)]
    pub runtime: Vec<DependencyEntry>,
    #[serde(default)]
    pub development: Vec<DependencyEntry>,
    #[serde(default)]
    pub peer: Vec<DependencyEntry>,
}

impl DependencyCategories {
    pub fn is_empty(&self) -> bool {
        self.runtime.is_empty() && self.development.is_empty() && self.peer.is_empty()
    }

    /// Append another set, skipping names already present in the same category
    pub fn merge(&mut self, other: DependencyCategories) {
        merge_unique(&mut self.runtime, other.runtime);
        merge_unique(&mut self.development, other.development);
        merge_unique(&mut self.peer, other.peer);
    }
}

fn merge_unique(target: &mut Vec<DependencyEntry>, incoming: Vec<DependencyEntry>) {
    for entry in incoming {
        if !target.iter().any(|e| e.name == entry.name) {
            target.push(entry);
        }
    }
}

/// Package manager inferred from lock files or manifests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
    Poetry,
    Pip,
    Cargo,
    Go,
    Bundler,
    Composer,
    Swift,
}

impl PackageManager {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
            Self::Bun => "bun",
            Self::Poetry => "poetry",
            Self::Pip => "pip",
            Self::Cargo => "cargo",
            Self::Go => "go",
            Self::Bundler => "bundler",
            Self::Composer => "composer",
            Self::Swift => "swift",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_dir() {
        let mut record = FileRecord {
            path: "src/lib/util.ts".to_string(),
            name: "util.ts".to_string(),
            extension: "ts".to_string(),
            size_bytes: 10,
            modified_at: Utc::now(),
            line_count: Some(1),
            language: Some("TypeScript".to_string()),
        };
        assert_eq!(record.top_level_dir(), Some("src"));

        record.path = "README.md".to_string();
        assert_eq!(record.top_level_dir(), None);
    }

    #[test]
    fn test_serialized_names() {
        let json = serde_json::to_string(&KeyFileCategory::BuildConfig).unwrap();
        assert_eq!(json, "\"build-config\"");
        let json = serde_json::to_string(&ProjectType::ApiServer).unwrap();
        assert_eq!(json, "\"api-server\"");
        let json = serde_json::to_string(&PackageManager::Pnpm).unwrap();
        assert_eq!(json, "\"pnpm\"");
    }

    #[test]
    fn test_merge_skips_duplicate_names() {
        let mut base = DependencyCategories {
            runtime: vec![DependencyEntry::new("serde", Some("1.0".into()))],
            ..Default::default()
        };
        base.merge(DependencyCategories {
            runtime: vec![
                DependencyEntry::new("serde", Some("2.0".into())),
                DependencyEntry::new("tokio", None),
            ],
            ..Default::default()
        });

        assert_eq!(base.runtime.len(), 2);
        assert_eq!(base.runtime[0].version.as_deref(), Some("1.0"));
    }
}
