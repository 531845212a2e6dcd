//! Workspace scanning and classification
//!
//! Walks a project tree, then derives languages, frameworks, project type,
//! key files, directory purposes and declared dependencies from the result.

pub mod analyzer;
pub mod dependencies;
pub mod detector;
pub mod ignore_rules;
pub mod manifest;
pub mod models;
pub mod patterns;
pub mod scanner;
pub mod structure;

pub use analyzer::{Classification, classify};
pub use ignore_rules::{IgnorePredicate, IgnoreRules};
pub use manifest::{
    BinField, Manifests, PackageManifest, decode_lossy, read_lossy, read_lossy_async,
    read_package_manifest,
};
pub use models::{
    DependencyCategories, DependencyEntry, DirectoryEntry, FileRecord, KeyFile, KeyFileCategory,
    PackageManager, ProjectType,
};
pub use scanner::scan;
