//! Best-effort `package.json` reader
//!
//! Manifests are arbitrary JSON in the wild, so every field is extracted
//! independently: a field with an unexpected JSON type is treated as absent
//! instead of failing the whole manifest.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::io;
use std::path::Path;

/// The `bin` field of a package manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BinField {
    #[default]
    None,
    /// `"bin": "cli.js"`
    Single(String),
    /// `"bin": { "tool": "cli.js" }`
    Map(BTreeMap<String, String>),
}

impl BinField {
    /// All script paths declared by the field
    pub fn paths(&self) -> Vec<&str> {
        match self {
            Self::None => Vec::new(),
            Self::Single(path) => vec![path.as_str()],
            Self::Map(map) => map.values().map(String::as_str).collect(),
        }
    }
}

/// Parsed `package.json`. Missing maps are empty; non-string versions are
/// kept as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageManifest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub main: Option<String>,
    pub bin: BinField,
    pub dependencies: BTreeMap<String, Option<String>>,
    pub dev_dependencies: BTreeMap<String, Option<String>>,
    pub peer_dependencies: BTreeMap<String, Option<String>>,
}

impl PackageManifest {
    /// Parse manifest content; returns `None` unless the document is a JSON object
    pub fn from_json_str(content: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(content).ok()?;
        let object = value.as_object()?;

        Some(Self {
            name: string_field(object, "name"),
            description: string_field(object, "description"),
            main: string_field(object, "main"),
            bin: bin_field(object),
            dependencies: dependency_map(object, "dependencies"),
            dev_dependencies: dependency_map(object, "devDependencies"),
            peer_dependencies: dependency_map(object, "peerDependencies"),
        })
    }

    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.contains_key(name)
    }

    pub fn has_dev_dependency(&self, name: &str) -> bool {
        self.dev_dependencies.contains_key(name)
    }
}

/// Decode file content as UTF-8, replacing invalid sequences
pub fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/// Read a text file, tolerating invalid UTF-8
pub fn read_lossy(path: &Path) -> io::Result<String> {
    std::fs::read(path).map(decode_lossy)
}

/// Async [`read_lossy`]
pub async fn read_lossy_async(path: &Path) -> io::Result<String> {
    tokio::fs::read(path).await.map(decode_lossy)
}

/// Read `package.json` under `root`; absence or a parse failure yields `None`
pub fn read_package_manifest(root: &Path) -> Option<PackageManifest> {
    let path = root.join("package.json");
    let content = read_lossy(&path).ok()?;
    let manifest = PackageManifest::from_json_str(&content);
    if manifest.is_none() {
        tracing::debug!("Ignoring unparseable manifest {}", path.display());
    }
    manifest
}

/// Manifest-derived facts the classifier consults
#[derive(Debug, Clone, Default)]
pub struct Manifests {
    /// Root `package.json`
    pub package: Option<PackageManifest>,
    /// Names declared in root `requirements.txt` / `pyproject.toml`
    pub python_packages: Vec<String>,
}

impl Manifests {
    /// Collect manifests at `root`. Missing files simply leave fields empty.
    pub fn read(root: &Path) -> Self {
        let mut python_packages = Vec::new();

        if let Ok(content) = read_lossy(&root.join("requirements.txt")) {
            python_packages.extend(
                super::dependencies::parse_requirements_txt(&content)
                    .into_iter()
                    .map(|d| d.name),
            );
        }
        if let Ok(content) = read_lossy(&root.join("pyproject.toml")) {
            let categories = super::dependencies::parse_pyproject_toml(&content);
            python_packages.extend(categories.runtime.into_iter().map(|d| d.name));
        }

        Self {
            package: read_package_manifest(root),
            python_packages,
        }
    }

    pub fn has_python_package(&self, name: &str) -> bool {
        self.python_packages
            .iter()
            .any(|p| p.eq_ignore_ascii_case(name))
    }
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(str::to_string)
}

fn bin_field(object: &Map<String, Value>) -> BinField {
    match object.get("bin") {
        Some(Value::String(path)) => BinField::Single(path.clone()),
        Some(Value::Object(map)) => BinField::Map(
            map.iter()
                .filter_map(|(k, v)| v.as_str().map(|p| (k.clone(), p.to_string())))
                .collect(),
        ),
        _ => BinField::None,
    }
}

fn dependency_map(object: &Map<String, Value>, key: &str) -> BTreeMap<String, Option<String>> {
    object
        .get(key)
        .and_then(Value::as_object)
        .map(|deps| {
            deps.iter()
                .map(|(name, version)| (name.clone(), version.as_str().map(str::to_string)))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_manifest() {
        let manifest = PackageManifest::from_json_str(
            r#"{
                "name": "demo",
                "main": "dist/index.js",
                "bin": { "demo": "bin/demo.js" },
                "dependencies": { "react": "^18.2.0" },
                "devDependencies": { "vitest": "^1.0.0" },
                "peerDependencies": { "react-dom": "*" }
            }"#,
        )
        .unwrap();

        assert_eq!(manifest.name.as_deref(), Some("demo"));
        assert_eq!(manifest.main.as_deref(), Some("dist/index.js"));
        assert_eq!(manifest.bin.paths(), vec!["bin/demo.js"]);
        assert!(manifest.has_dependency("react"));
        assert!(manifest.has_dev_dependency("vitest"));
        assert_eq!(
            manifest.peer_dependencies.get("react-dom"),
            Some(&Some("*".to_string()))
        );
    }

    #[test]
    fn test_wrong_field_types_are_absent() {
        let manifest = PackageManifest::from_json_str(
            r#"{ "name": 42, "bin": [1, 2], "dependencies": "none",
                 "devDependencies": { "weird": { "version": "1" } } }"#,
        )
        .unwrap();

        assert_eq!(manifest.name, None);
        assert_eq!(manifest.bin, BinField::None);
        assert!(manifest.dependencies.is_empty());
        assert_eq!(manifest.dev_dependencies.get("weird"), Some(&None));
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(PackageManifest::from_json_str("[]").is_none());
        assert!(PackageManifest::from_json_str("{ broken").is_none());
    }

    #[test]
    fn test_read_missing_manifest() {
        let temp = TempDir::new().unwrap();
        assert!(read_package_manifest(temp.path()).is_none());

        fs::write(temp.path().join("package.json"), "not json").unwrap();
        assert!(read_package_manifest(temp.path()).is_none());
    }

    #[test]
    fn test_manifests_collects_python_packages() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("requirements.txt"), "Flask==2.0.0\n").unwrap();

        let manifests = Manifests::read(temp.path());
        assert!(manifests.package.is_none());
        assert!(manifests.has_python_package("flask"));
    }

    #[test]
    fn test_invalid_utf8_is_read_lossily() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("requirements.txt"), b"\xc3\x28\nrequests>=2.0\n").unwrap();

        let manifests = Manifests::read(temp.path());
        assert_eq!(manifests.python_packages, vec!["requests".to_string()]);
        assert_eq!(decode_lossy(b"ok \xff".to_vec()), "ok \u{FFFD}");
    }
}
