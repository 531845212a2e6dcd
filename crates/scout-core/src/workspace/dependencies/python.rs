//! Python dependency parsers (requirements.txt, pyproject.toml)

use regex::Regex;
use std::sync::LazyLock;
use toml::{Table, Value};

use crate::workspace::models::{DependencyCategories, DependencyEntry};

/// `name[extras] spec`; the extras group is discarded
static REQUIREMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9][A-Za-z0-9._-]*)\s*(?:\[[^\]]*\])?\s*(.*)$").unwrap()
});

/// Split one requirement specifier into name and optional version spec.
/// Environment markers after `;` are dropped.
pub fn parse_requirement_spec(spec: &str) -> Option<DependencyEntry> {
    let spec = spec.split(';').next().unwrap_or_default().trim();
    let captures = REQUIREMENT.captures(spec)?;

    let name = captures.get(1)?.as_str();
    let version = captures
        .get(2)
        .map(|m| m.as_str().trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string);

    Some(DependencyEntry::new(name, version))
}

/// Parse `requirements.txt`, skipping blanks, comments and `-` flag lines
pub fn parse_requirements_txt(content: &str) -> Vec<DependencyEntry> {
    content
        .lines()
        .map(|line| line.split(" #").next().unwrap_or_default().trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(parse_requirement_spec)
        .collect()
}

/// Parse `pyproject.toml` in Poetry or PEP 621 layout.
/// Unparseable content yields empty categories.
pub fn parse_pyproject_toml(content: &str) -> DependencyCategories {
    let table: Table = match content.parse() {
        Ok(table) => table,
        Err(e) => {
            tracing::debug!("Ignoring unparseable pyproject.toml: {}", e);
            return DependencyCategories::default();
        }
    };

    let mut categories = DependencyCategories::default();

    if let Some(poetry) = lookup(&table, &["tool", "poetry"]) {
        if let Some(deps) = poetry.get("dependencies").and_then(Value::as_table) {
            categories.runtime.extend(poetry_entries(deps));
        }
        if let Some(deps) = poetry.get("dev-dependencies").and_then(Value::as_table) {
            categories.development.extend(poetry_entries(deps));
        }
        if let Some(deps) = lookup(poetry, &["group", "dev", "dependencies"]) {
            categories.development.extend(poetry_entries(deps));
        }
    }

    if let Some(project) = table.get("project").and_then(Value::as_table) {
        if let Some(deps) = project.get("dependencies").and_then(Value::as_array) {
            categories.runtime.extend(spec_entries(deps));
        }
        if let Some(deps) = lookup(project, &["optional-dependencies"])
            .and_then(|optional| optional.get("dev"))
            .and_then(Value::as_array)
        {
            categories.development.extend(spec_entries(deps));
        }
    }

    categories
}

fn lookup<'a>(table: &'a Table, keys: &[&str]) -> Option<&'a Table> {
    keys.iter()
        .try_fold(table, |current, key| current.get(*key).and_then(Value::as_table))
}

/// Poetry tables map names to a version string or a detail table
fn poetry_entries(deps: &Table) -> impl Iterator<Item = DependencyEntry> + '_ {
    deps.iter()
        .filter(|(name, _)| !name.eq_ignore_ascii_case("python"))
        .map(|(name, value)| {
            let version = match value {
                Value::String(v) => Some(v.clone()),
                Value::Table(detail) => detail
                    .get("version")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                _ => None,
            };
            DependencyEntry::new(name.as_str(), version)
        })
}

fn spec_entries(specs: &[Value]) -> impl Iterator<Item = DependencyEntry> + '_ {
    specs
        .iter()
        .filter_map(Value::as_str)
        .filter_map(parse_requirement_spec)
}
