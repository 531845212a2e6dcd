//! Scan pipeline: the persisted record, its phases and the orchestrator

mod models;
mod orchestrator;
mod phase;

pub use models::{DependencyReport, ProjectOverview, ProjectScan, SCAN_FORMAT_VERSION};
pub use orchestrator::{
    DEFAULT_LLM_TIMEOUT, ProgressCallback, ScanOptions, ScanOrchestrator, collect_dependencies,
};
pub use phase::ScanPhase;
