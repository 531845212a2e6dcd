//! package.json dependency parser for JavaScript/TypeScript projects

use std::collections::BTreeMap;

use super::purposes::dependency_purpose;
use crate::workspace::manifest::PackageManifest;
use crate::workspace::models::{DependencyCategories, DependencyEntry};

/// Parse `package.json` content. Invalid JSON yields empty categories.
pub fn parse_package_json(content: &str) -> DependencyCategories {
    PackageManifest::from_json_str(content)
        .map(|manifest| categories_from_manifest(&manifest))
        .unwrap_or_default()
}

/// Map the three manifest maps onto categories, annotating purposes
pub fn categories_from_manifest(manifest: &PackageManifest) -> DependencyCategories {
    DependencyCategories {
        runtime: entries(&manifest.dependencies),
        development: entries(&manifest.dev_dependencies),
        peer: entries(&manifest.peer_dependencies),
    }
}

fn entries(map: &BTreeMap<String, Option<String>>) -> Vec<DependencyEntry> {
    map.iter()
        .map(|(name, version)| DependencyEntry {
            name: name.clone(),
            version: version.clone(),
            purpose: dependency_purpose(name).map(str::to_string),
        })
        .collect()
}
