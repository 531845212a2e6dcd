//! Markdown rendering of a stored scan

use crate::scan::ProjectScan;
use crate::workspace::models::DependencyEntry;

/// Render a scan as markdown. Sections without content are left out.
pub fn render_markdown(scan: &ProjectScan) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", scan.project_name));
    out.push_str(&format!(
        "> Scanned {} from `{}`\n\n",
        scan.scanned_at.format("%Y-%m-%d %H:%M UTC"),
        scan.project_path
    ));

    render_overview(&mut out, scan);
    render_documentation(&mut out, scan);
    render_directories(&mut out, scan);
    render_key_files(&mut out, scan);
    render_dependencies(&mut out, scan);
    render_architecture(&mut out, scan);

    out.push_str("---\n\n");
    out.push_str(&format!("*Scan format version {}*\n", scan.version));
    out
}

fn render_overview(out: &mut String, scan: &ProjectScan) {
    let overview = &scan.overview;
    out.push_str("## Overview\n\n");
    if !overview.summary.is_empty() {
        out.push_str(&format!("{}\n\n", overview.summary));
    }

    out.push_str(&format!("- **Type:** {}\n", overview.project_type));
    if !overview.languages.is_empty() {
        out.push_str(&format!("- **Languages:** {}\n", overview.languages.join(", ")));
    }
    if !overview.frameworks.is_empty() {
        out.push_str(&format!("- **Frameworks:** {}\n", overview.frameworks.join(", ")));
    }
    if let Some(pm) = overview.package_manager {
        out.push_str(&format!("- **Package manager:** {}\n", pm));
    }
    out.push_str(&format!(
        "- **Size:** {} files, {} lines\n\n",
        overview.total_files, overview.total_lines
    ));
}

fn render_documentation(out: &mut String, scan: &ProjectScan) {
    let docs = &scan.documentation;
    out.push_str("## Documentation\n\n");
    out.push_str(&format!(
        "- **Coverage:** {}/100 ({})\n",
        docs.coverage.score, docs.coverage.level
    ));
    if let Some(readme) = &docs.readme_path {
        out.push_str(&format!("- **README:** `{}`\n", readme));
    }
    if !docs.doc_files.is_empty() {
        out.push_str(&format!("- **Doc files:** {}\n", docs.doc_files.len()));
    }
    out.push('\n');

    if let Some(summary) = &docs.readme_summary {
        out.push_str(&format!("{}\n\n", summary));
    }
}

fn render_directories(out: &mut String, scan: &ProjectScan) {
    if scan.directory_structure.is_empty() {
        return;
    }

    out.push_str("## Directory Structure\n\n");
    out.push_str("| Directory | Purpose | Files | Language |\n");
    out.push_str("|-----------|---------|-------|----------|\n");
    for dir in &scan.directory_structure {
        out.push_str(&format!(
            "| `{}/` | {} | {} | {} |\n",
            cell(&dir.path),
            cell(&dir.purpose),
            dir.file_count,
            dir.primary_language.as_deref().unwrap_or("-")
        ));
    }
    out.push('\n');
}

fn render_key_files(out: &mut String, scan: &ProjectScan) {
    if scan.key_files.is_empty() {
        return;
    }

    out.push_str("## Key Files\n\n");
    for file in &scan.key_files {
        out.push_str(&format!("- `{}` ({}): {}\n", file.path, file.category, file.reason));
    }
    out.push('\n');
}

fn render_dependencies(out: &mut String, scan: &ProjectScan) {
    let deps = &scan.dependencies;
    if deps.total() == 0 {
        return;
    }

    out.push_str("## Dependencies\n\n");
    if let Some(pm) = deps.package_manager {
        out.push_str(&format!("Managed with {}.\n\n", pm));
    }
    dependency_table(out, "Runtime", &deps.categories.runtime);
    dependency_table(out, "Development", &deps.categories.development);
    dependency_table(out, "Peer", &deps.categories.peer);
}

fn dependency_table(out: &mut String, title: &str, entries: &[DependencyEntry]) {
    if entries.is_empty() {
        return;
    }

    out.push_str(&format!("### {}\n\n", title));
    out.push_str("| Package | Version | Purpose |\n");
    out.push_str("|---------|---------|---------|\n");
    for dep in entries {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            cell(&dep.name),
            cell(dep.version.as_deref().unwrap_or("-")),
            cell(dep.purpose.as_deref().unwrap_or("-"))
        ));
    }
    out.push('\n');
}

fn render_architecture(out: &mut String, scan: &ProjectScan) {
    let arch = &scan.architecture;
    if arch.description.is_empty() && arch.components.is_empty() && arch.diagram.is_none() {
        return;
    }

    out.push_str("## Architecture\n\n");
    if !arch.description.is_empty() {
        out.push_str(&format!("{}\n\n", arch.description));
    }

    if !arch.components.is_empty() {
        out.push_str("### Components\n\n");
        for component in &arch.components {
            out.push_str(&format!(
                "- **{}** ({}): {}",
                component.name, component.component_type, component.description
            ));
            if !component.dependencies.is_empty() {
                out.push_str(&format!(" Depends on {}.", component.dependencies.join(", ")));
            }
            out.push('\n');
        }
        out.push('\n');
    }

    if let Some(diagram) = &arch.diagram {
        out.push_str(&format!("```mermaid\n{}\n```\n\n", diagram.trim_end()));
    }
}

/// Escape pipes so a value cannot break a table row
fn cell(value: &str) -> String {
    value.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::architecture::ArchitectureSummary;
    use crate::test_support::sample_scan;

    #[test]
    fn test_section_order() {
        let md = render_markdown(&sample_scan("demo-1234abcd"));

        let positions: Vec<usize> = [
            "## Overview",
            "## Documentation",
            "## Directory Structure",
            "## Key Files",
            "## Dependencies",
            "## Architecture",
            "*Scan format version 1.0.0*",
        ]
        .iter()
        .map(|heading| md.find(heading).unwrap())
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(md.starts_with("# demo\n"));
        assert!(md.contains("```mermaid\nflowchart TD"));
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let mut scan = sample_scan("demo-1234abcd");
        scan.directory_structure.clear();
        scan.key_files.clear();
        scan.dependencies = Default::default();
        scan.architecture = ArchitectureSummary::default();

        let md = render_markdown(&scan);
        assert!(md.contains("## Overview"));
        assert!(md.contains("## Documentation"));
        assert!(!md.contains("## Directory Structure"));
        assert!(!md.contains("## Key Files"));
        assert!(!md.contains("## Dependencies"));
        assert!(!md.contains("## Architecture"));
        assert!(!md.contains("```mermaid"));
    }

    #[test]
    fn test_table_cells_escape_pipes() {
        assert_eq!(cell("a|b"), "a\\|b");
    }
}
