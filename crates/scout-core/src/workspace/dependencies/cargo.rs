//! Cargo.toml dependency parser for Rust projects

use toml::{Table, Value};

use crate::workspace::models::{DependencyCategories, DependencyEntry};

/// Parse `Cargo.toml`. `[dependencies]` and `[workspace.dependencies]` are
/// runtime, `[dev-dependencies]` is development. Entries come out sorted by
/// name within each table.
pub fn parse_cargo_toml(content: &str) -> DependencyCategories {
    let table: Table = match content.parse() {
        Ok(table) => table,
        Err(e) => {
            tracing::debug!("Ignoring unparseable Cargo.toml: {}", e);
            return DependencyCategories::default();
        }
    };

    let section = |value: Option<&Value>| -> Vec<DependencyEntry> {
        value
            .and_then(Value::as_table)
            .map(|deps| deps.iter().map(|(name, spec)| entry(name, spec)).collect())
            .unwrap_or_default()
    };

    let mut categories = DependencyCategories {
        runtime: section(table.get("dependencies")),
        development: section(table.get("dev-dependencies")),
        peer: Vec::new(),
    };

    let workspace = table
        .get("workspace")
        .and_then(Value::as_table)
        .and_then(|ws| ws.get("dependencies"));
    categories.merge(DependencyCategories {
        runtime: section(workspace),
        ..Default::default()
    });

    categories
}

/// `name = "1.0"`, `name = { version = "1.0" }`, or a git/path/workspace
/// table without a version
fn entry(name: &str, spec: &Value) -> DependencyEntry {
    let version = match spec {
        Value::String(version) => Some(version.clone()),
        Value::Table(detail) => detail
            .get("version")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    };
    DependencyEntry::new(name, version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_forms() {
        let deps = parse_cargo_toml(
            r#"
[package]
name = "demo"

[dependencies]
serde = "1.0"
tokio = { version = "1.0", features = ["full"] }
mylib = { git = "https://github.com/example/mylib" }
shared = { path = "../shared" }

[dev-dependencies]
tempfile = "3"
"#,
        );

        let tokio = deps.runtime.iter().find(|d| d.name == "tokio").unwrap();
        assert_eq!(tokio, &DependencyEntry::new("tokio", Some("1.0".into())));
        let mylib = deps.runtime.iter().find(|d| d.name == "mylib").unwrap();
        assert_eq!(mylib.version, None);
        assert_eq!(deps.runtime.len(), 4);
        assert_eq!(deps.development, vec![DependencyEntry::new("tempfile", Some("3".into()))]);
    }

    #[test]
    fn test_workspace_dependencies() {
        let deps = parse_cargo_toml(
            r#"
[workspace]
members = ["crates/*"]

[workspace.dependencies]
anyhow = "1.0"
serde = { version = "1.0", features = ["derive"] }
"#,
        );

        let names: Vec<_> = deps.runtime.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["anyhow", "serde"]);
    }

    #[test]
    fn test_member_inherits_workspace() {
        let deps = parse_cargo_toml("[dependencies]\nserde = { workspace = true }\n");
        assert_eq!(deps.runtime, vec![DependencyEntry::new("serde", None)]);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(parse_cargo_toml("not = [valid").is_empty());
    }
}
