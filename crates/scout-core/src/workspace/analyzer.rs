//! Classifier entry point combining the per-aspect detectors

use super::dependencies::detect_package_manager;
use super::detector::{DetectedFramework, detect_frameworks, infer_project_type, rank_languages};
use super::manifest::Manifests;
use super::models::{DirectoryEntry, FileRecord, KeyFile, PackageManager, ProjectType};
use super::patterns::identify_key_files;
use super::structure::analyze_directories;

/// Everything the classifier derives from one file list
#[derive(Debug, Clone)]
pub struct Classification {
    /// Languages ranked by total lines
    pub languages: Vec<String>,
    pub frameworks: Vec<DetectedFramework>,
    pub project_type: ProjectType,
    pub key_files: Vec<KeyFile>,
    pub directories: Vec<DirectoryEntry>,
    pub package_manager: Option<PackageManager>,
    pub total_files: usize,
    /// Sum of all known line counts
    pub total_lines: usize,
}

impl Classification {
    pub fn framework_names(&self) -> Vec<String> {
        self.frameworks.iter().map(|f| f.name.clone()).collect()
    }
}

/// Run every classifier over the scanned files
pub fn classify(files: &[FileRecord], manifests: &Manifests) -> Classification {
    let frameworks = detect_frameworks(files, manifests);
    let project_type = infer_project_type(&frameworks, files);

    tracing::debug!(
        "Classified {} files as {} with {} frameworks",
        files.len(),
        project_type,
        frameworks.len()
    );

    Classification {
        languages: rank_languages(files),
        project_type,
        key_files: identify_key_files(files, manifests.package.as_ref()),
        directories: analyze_directories(files),
        package_manager: detect_package_manager(files),
        total_files: files.len(),
        total_lines: files.iter().filter_map(|f| f.line_count).sum(),
        frameworks,
    }
}
