//! Documentation analysis
//!
//! Locates the README and doc files, samples source files for comment
//! density, and scores overall documentation coverage.

mod comments;
mod coverage;
mod readme;

pub use comments::{CommentStats, extract_comments, supports_extension};
pub use coverage::{Coverage, CoverageLevel, compute_coverage};
pub use readme::{ReadmeInfo, find_readme, parse_readme};

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::workspace::models::FileRecord;
use crate::workspace::read_lossy_async;

/// Maximum number of source files read for comment statistics
const COMMENT_SAMPLE_LIMIT: usize = 200;

const DOC_DIRS: &[&str] = &["docs/", "documentation/"];
const DOC_EXTENSIONS: &[&str] = &["md", "rst"];

/// Documentation facts recorded in a scan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentationSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readme_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readme_summary: Option<String>,
    pub has_documentation: bool,
    pub doc_files: Vec<String>,
    pub coverage: Coverage,
}

/// Markdown or reStructuredText files under a docs directory or at the root,
/// excluding the README
pub fn find_doc_files(files: &[FileRecord], readme_path: Option<&str>) -> Vec<String> {
    files
        .iter()
        .filter(|f| DOC_EXTENSIONS.contains(&f.extension.as_str()))
        .filter(|f| Some(f.path.as_str()) != readme_path)
        .filter(|f| !f.path.contains('/') || DOC_DIRS.iter().any(|dir| f.path.starts_with(dir)))
        .map(|f| f.path.clone())
        .collect()
}

/// Analyze documentation for the project at `root`.
///
/// Content is decoded lossily. A README that cannot be read still counts as
/// present but contributes no summary; unreadable source files are left out
/// of the comment sample.
pub async fn analyze_documentation(root: &Path, files: &[FileRecord]) -> DocumentationSummary {
    let readme = find_readme(files);
    let readme_info = match readme {
        Some(record) => match read_lossy_async(&root.join(&record.path)).await {
            Ok(content) => Some(parse_readme(&content)),
            Err(e) => {
                tracing::debug!("Skipping unreadable README {}: {}", record.path, e);
                None
            }
        },
        None => None,
    };

    let readme_path = readme.map(|r| r.path.clone());
    let doc_files = find_doc_files(files, readme_path.as_deref());
    let comment_ratio = sample_comment_ratio(root, files).await;
    let coverage = compute_coverage(readme.is_some(), doc_files.len(), comment_ratio);

    tracing::debug!(
        "Documentation coverage {} ({}), {} doc files",
        coverage.score,
        coverage.level,
        doc_files.len()
    );

    DocumentationSummary {
        readme_summary: readme_info.as_ref().and_then(ReadmeInfo::summary),
        has_documentation: readme.is_some() || !doc_files.is_empty(),
        readme_path,
        doc_files,
        coverage,
    }
}

/// Comments per line over a bounded sample of source files, rounded to four
/// decimal places
async fn sample_comment_ratio(root: &Path, files: &[FileRecord]) -> f64 {
    let mut totals = CommentStats::default();
    let mut lines = 0usize;

    let sample = files
        .iter()
        .filter(|f| f.line_count.is_some() && supports_extension(&f.extension))
        .take(COMMENT_SAMPLE_LIMIT);

    for file in sample {
        match read_lossy_async(&root.join(&file.path)).await {
            Ok(content) => {
                totals.add(extract_comments(&content, &file.extension));
                lines += file.line_count.unwrap_or_default();
            }
            Err(e) => tracing::debug!("Skipping {} for comment stats: {}", file.path, e),
        }
    }

    if lines == 0 {
        return 0.0;
    }
    let ratio = totals.total() as f64 / lines as f64;
    (ratio * 10_000.0).round() / 10_000.0
}
