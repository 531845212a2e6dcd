//! Scout Core Library
//!
//! Scans a project directory and produces a persisted [`ProjectScan`]: file
//! inventory, classification, dependencies, documentation coverage and an
//! optional model-synthesized architecture summary.

pub mod architecture;
pub mod config;
pub mod documentation;
pub mod error;
pub mod llm;
pub mod scan;
pub mod storage;
pub mod workspace;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use architecture::{ArchitectureComponent, ArchitectureSummary, ComponentType};
pub use config::{LogFormat, ScoutConfig, load_config};
pub use documentation::{Coverage, CoverageLevel, DocumentationSummary};
pub use error::{ScoutError, ScoutResult};
pub use llm::TextCompletion;
pub use scan::{ProjectScan, ScanOptions, ScanOrchestrator, ScanPhase};
pub use storage::{FileScanStorage, MemoryScanStorage, ScanStorage, project_id_for_path};
pub use workspace::{FileRecord, ProjectType};
