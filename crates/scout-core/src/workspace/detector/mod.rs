//! Project classification
//!
//! Pure functions over the scanner's file list and the root manifests:
//! language ranking, framework detection and project type inference.

mod frameworks;
mod languages;
mod project_type;

pub use frameworks::{
    DetectedFramework, DetectionSource, FRAMEWORKS, FrameworkDefinition, detect_frameworks,
};
pub use languages::{LanguageShare, language_line_totals, rank_languages};
pub use project_type::infer_project_type;
