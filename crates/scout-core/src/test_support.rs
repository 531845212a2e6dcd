//! Fixture builders shared by unit tests

use chrono::{TimeZone, Utc};

use crate::architecture::{
    ArchitectureComponent, ArchitectureSummary, ComponentType, generate_mermaid,
};
use crate::documentation::{DocumentationSummary, compute_coverage};
use crate::scan::{DependencyReport, ProjectOverview, ProjectScan, SCAN_FORMAT_VERSION};
use crate::workspace::models::{
    DependencyCategories, DependencyEntry, DirectoryEntry, FileRecord, KeyFile, KeyFileCategory,
    PackageManager, ProjectType,
};
use crate::workspace::scanner::extension_to_language;

/// A file record as the scanner would produce it for a small text file
pub(crate) fn file_record(path: &str, lines: usize) -> FileRecord {
    let name = path.rsplit('/').next().unwrap_or(path).to_string();
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();

    FileRecord {
        path: path.to_string(),
        name,
        language: extension_to_language(&extension).map(str::to_string),
        extension,
        size_bytes: (lines * 20) as u64,
        modified_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        line_count: Some(lines),
    }
}

/// A fully populated scan, stable across calls with the same ID
pub(crate) fn sample_scan(project_id: &str) -> ProjectScan {
    let components = vec![
        ArchitectureComponent {
            name: "CLI".to_string(),
            component_type: ComponentType::Layer,
            description: "Argument parsing and output".to_string(),
            dependencies: vec!["Core".to_string()],
            key_files: vec!["src/main.rs".to_string()],
        },
        ArchitectureComponent {
            name: "Core".to_string(),
            component_type: ComponentType::Module,
            description: "Scanning logic".to_string(),
            dependencies: Vec::new(),
            key_files: vec!["src/lib.rs".to_string()],
        },
    ];
    let diagram = generate_mermaid(&components);

    let mut runtime = DependencyEntry::new("serde", Some("1.0".to_string()));
    runtime.purpose = Some("Serialization".to_string());

    ProjectScan {
        version: SCAN_FORMAT_VERSION.to_string(),
        scanned_at: Utc.with_ymd_and_hms(2024, 5, 2, 9, 30, 0).unwrap(),
        project_id: project_id.to_string(),
        project_name: "demo".to_string(),
        project_path: "/work/demo".to_string(),
        overview: ProjectOverview {
            summary: "A small command-line tool".to_string(),
            project_type: ProjectType::Cli,
            languages: vec!["Rust".to_string()],
            frameworks: vec!["Clap".to_string()],
            package_manager: Some(PackageManager::Cargo),
            total_files: 4,
            total_lines: 120,
        },
        directory_structure: vec![DirectoryEntry {
            path: "src".to_string(),
            purpose: "Source code".to_string(),
            file_count: 2,
            primary_language: Some("Rust".to_string()),
        }],
        key_files: vec![KeyFile {
            path: "Cargo.toml".to_string(),
            reason: "Package manifest".to_string(),
            category: KeyFileCategory::Config,
            summary: None,
        }],
        documentation: DocumentationSummary {
            readme_path: Some("README.md".to_string()),
            readme_summary: Some("demo: a small command-line tool".to_string()),
            has_documentation: true,
            doc_files: vec!["docs/guide.md".to_string()],
            coverage: compute_coverage(true, 1, 0.125),
        },
        dependencies: DependencyReport {
            package_manager: Some(PackageManager::Cargo),
            categories: DependencyCategories {
                runtime: vec![runtime],
                development: vec![DependencyEntry::new("tempfile", Some("3".to_string()))],
                peer: Vec::new(),
            },
        },
        architecture: ArchitectureSummary {
            description: "A CLI layer over a core library".to_string(),
            components,
            diagram: Some(diagram),
        },
    }
}
