//! Deterministic Mermaid flowchart for architecture components

use std::collections::HashSet;

use super::ArchitectureComponent;

/// Build a top-down flowchart. Nodes are keyed `C0`, `C1`, ... by position;
/// dependency names that do not match another component produce no edge.
pub fn generate_mermaid(components: &[ArchitectureComponent]) -> String {
    let mut lines = vec!["flowchart TD".to_string()];

    for (index, component) in components.iter().enumerate() {
        lines.push(format!("    C{}[\"{}\"]", index, escape_label(&component.name)));
    }

    let mut seen = HashSet::new();
    for (from, component) in components.iter().enumerate() {
        for dependency in &component.dependencies {
            let target = components
                .iter()
                .enumerate()
                .find(|(to, other)| *to != from && other.name == *dependency)
                .map(|(to, _)| to);

            if let Some(to) = target {
                if seen.insert((from, to)) {
                    lines.push(format!("    C{} --> C{}", from, to));
                }
            }
        }
    }

    lines.join("\n")
}

fn escape_label(name: &str) -> String {
    name.replace('"', "#quot;")
}
