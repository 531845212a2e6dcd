//! Project type inference

use super::frameworks::DetectedFramework;
use crate::workspace::models::{FileRecord, ProjectType};

const CLI_FRAMEWORKS: &[&str] = &["Ink", "oclif"];
const WEB_FRAMEWORKS: &[&str] = &["React", "Vue", "Angular", "Svelte", "Next.js"];
const API_FRAMEWORKS: &[&str] = &["Express", "Fastify", "NestJS", "FastAPI", "Flask", "Django"];
const DESKTOP_FRAMEWORKS: &[&str] = &["Electron"];

const LIBRARY_ROOTS: &[&str] = &["lib/", "src/", "packages/"];
const LIBRARY_INDEX: &[&str] = &["index.ts", "index.js"];

/// Apply the ordered rule chain; the first matching rule decides.
pub fn infer_project_type(frameworks: &[DetectedFramework], files: &[FileRecord]) -> ProjectType {
    let has_any = |names: &[&str]| frameworks.iter().any(|f| names.contains(&f.name.as_str()));

    if has_any(CLI_FRAMEWORKS) {
        return ProjectType::Cli;
    }
    if has_any(WEB_FRAMEWORKS) {
        return ProjectType::WebApp;
    }
    if has_any(API_FRAMEWORKS) {
        return ProjectType::ApiServer;
    }
    if has_any(DESKTOP_FRAMEWORKS) {
        return ProjectType::DesktopApp;
    }

    let has_library_sources = files
        .iter()
        .any(|f| LIBRARY_ROOTS.iter().any(|root| f.path.starts_with(root)));
    let has_root_index = files.iter().any(|f| LIBRARY_INDEX.contains(&f.path.as_str()));
    if has_library_sources && has_root_index {
        return ProjectType::Library;
    }

    let has_docs = files.iter().any(|f| {
        f.path
            .strip_prefix("docs/")
            .is_some_and(|rest| !rest.contains('/') && rest.ends_with(".md"))
    });
    if has_docs {
        return ProjectType::Documentation;
    }

    ProjectType::Other
}
