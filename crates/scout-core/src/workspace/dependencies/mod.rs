//! Dependency parsers for npm, pip, cargo and go manifests
//!
//! Every parser is a pure function of the manifest content. Callers read the
//! files and decide which parsers apply.

use super::models::{FileRecord, PackageManager};

mod cargo;
mod go;
mod npm;
mod purposes;
mod python;

pub use cargo::parse_cargo_toml;
pub use go::parse_go_mod;
pub use npm::{categories_from_manifest, parse_package_json};
pub use purposes::dependency_purpose;
pub use python::{parse_pyproject_toml, parse_requirement_spec, parse_requirements_txt};

/// Lock files in priority order
const LOCK_FILES: &[(&str, PackageManager)] = &[
    ("package-lock.json", PackageManager::Npm),
    ("yarn.lock", PackageManager::Yarn),
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("bun.lockb", PackageManager::Bun),
    ("poetry.lock", PackageManager::Poetry),
    ("Cargo.lock", PackageManager::Cargo),
    ("go.sum", PackageManager::Go),
    ("Gemfile.lock", PackageManager::Bundler),
];

/// Manifest fallbacks when no lock file is present
const MANIFEST_FILES: &[(&str, PackageManager)] = &[
    ("requirements.txt", PackageManager::Pip),
    ("pyproject.toml", PackageManager::Pip),
    ("Cargo.toml", PackageManager::Cargo),
    ("go.mod", PackageManager::Go),
    ("Gemfile", PackageManager::Bundler),
    ("composer.json", PackageManager::Composer),
    ("Package.swift", PackageManager::Swift),
];

/// Detect the package manager from root-level lock files, then manifests
pub fn detect_package_manager(files: &[FileRecord]) -> Option<PackageManager> {
    let present = |name: &str| files.iter().any(|f| f.path == name);

    LOCK_FILES
        .iter()
        .chain(MANIFEST_FILES)
        .find(|(name, _)| present(name))
        .map(|(_, manager)| *manager)
}
