//! Bounded project context handed to the prompt

use crate::workspace::analyzer::Classification;
use crate::workspace::models::{DirectoryEntry, FileRecord, KeyFile, ProjectType};

/// Maximum number of file paths included in the prompt
pub const MAX_CONTEXT_FILES: usize = 50;

/// What the model sees about the project
#[derive(Debug, Clone, PartialEq)]
pub struct ArchitectureContext {
    pub project_name: String,
    pub project_type: ProjectType,
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub directories: Vec<DirectoryEntry>,
    pub key_files: Vec<KeyFile>,
    /// First [`MAX_CONTEXT_FILES`] scanned paths
    pub files: Vec<String>,
    pub total_files: usize,
}

impl ArchitectureContext {
    /// Build the context: classifier output is kept whole, the file list is
    /// truncated
    pub fn build(
        project_name: impl Into<String>,
        classification: &Classification,
        files: &[FileRecord],
    ) -> Self {
        Self {
            project_name: project_name.into(),
            project_type: classification.project_type,
            languages: classification.languages.clone(),
            frameworks: classification.framework_names(),
            directories: classification.directories.clone(),
            key_files: classification.key_files.clone(),
            files: files
                .iter()
                .take(MAX_CONTEXT_FILES)
                .map(|f| f.path.clone())
                .collect(),
            total_files: files.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::file_record;
    use crate::workspace::analyzer::classify;
    use crate::workspace::manifest::Manifests;

    #[test]
    fn test_file_list_is_capped() {
        let files: Vec<_> = (0..80)
            .map(|i| file_record(&format!("src/mod{}.rs", i), 10))
            .collect();
        let classification = classify(&files, &Manifests::default());

        let context = ArchitectureContext::build("demo", &classification, &files);
        assert_eq!(context.files.len(), MAX_CONTEXT_FILES);
        assert_eq!(context.files[0], "src/mod0.rs");
        assert_eq!(context.total_files, 80);
        assert_eq!(context.languages, vec!["Rust"]);
        assert_eq!(context.directories.len(), 1);
    }
}
