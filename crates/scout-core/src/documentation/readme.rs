//! README discovery and parsing

use crate::workspace::models::FileRecord;

/// README names in preference order, compared case-insensitively
const README_NAMES: &[&str] = &["readme.md", "readme.markdown", "readme.rst", "readme.txt"];

/// Structure extracted from a README
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadmeInfo {
    /// Text of the first `# ` heading
    pub title: Option<String>,
    /// First paragraph of body text
    pub description: Option<String>,
    /// `## ` heading texts in document order
    pub sections: Vec<String>,
    pub has_installation: bool,
    pub has_usage: bool,
    pub has_api: bool,
    pub has_examples: bool,
}

impl ReadmeInfo {
    /// One-line summary: the description, else the title
    pub fn summary(&self) -> Option<String> {
        self.description.clone().or_else(|| self.title.clone())
    }
}

/// Pick the root-level README, preferring markdown
pub fn find_readme(files: &[FileRecord]) -> Option<&FileRecord> {
    README_NAMES.iter().find_map(|wanted| {
        files
            .iter()
            .find(|f| !f.path.contains('/') && f.name.eq_ignore_ascii_case(wanted))
    })
}

/// Extract title, first paragraph and section flags
pub fn parse_readme(content: &str) -> ReadmeInfo {
    let mut info = ReadmeInfo::default();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut paragraph_done = false;

    for line in content.lines() {
        let trimmed = line.trim();

        if let Some(title) = trimmed.strip_prefix("# ") {
            if info.title.is_none() {
                info.title = Some(title.trim().to_string());
            }
        } else if let Some(section) = trimmed.strip_prefix("## ") {
            info.sections.push(section.trim().to_string());
        }

        if paragraph_done {
            continue;
        }
        if trimmed.starts_with('#') {
            paragraph_done = !paragraph.is_empty();
        } else if trimmed.is_empty() {
            paragraph_done = !paragraph.is_empty();
        } else if paragraph.is_empty() && is_badge_line(trimmed) {
            continue;
        } else {
            paragraph.push(trimmed);
        }
    }

    if !paragraph.is_empty() {
        info.description = Some(paragraph.join(" "));
    }

    for section in &info.sections {
        let lower = section.to_lowercase();
        info.has_installation |= lower.contains("install");
        info.has_usage |= lower.contains("usage");
        info.has_api |= lower.contains("api");
        info.has_examples |= lower.contains("example");
    }

    info
}

/// Badge rows and images that precede the real first paragraph
fn is_badge_line(line: &str) -> bool {
    line.starts_with("[![") || line.starts_with("![") || line.starts_with("<img")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::file_record;

    const README: &str = "# Scout\n\
[![build](https://ci.example.com/badge.svg)](https://ci.example.com)\n\
\n\
Scans projects and\n\
writes snapshots.\n\
\n\
More detail here.\n\
\n\
## Installation\n\
cargo install scout\n\
## Usage Examples\n\
## REST API\n";

    #[test]
    fn test_parse_readme() {
        let info = parse_readme(README);
        assert_eq!(info.title.as_deref(), Some("Scout"));
        assert_eq!(
            info.description.as_deref(),
            Some("Scans projects and writes snapshots.")
        );
        assert_eq!(info.sections, vec!["Installation", "Usage Examples", "REST API"]);
        assert!(info.has_installation);
        assert!(info.has_usage);
        assert!(info.has_api);
        assert!(info.has_examples);
    }

    #[test]
    fn test_paragraph_ends_at_heading() {
        let info = parse_readme("Intro line\n## Next\nbody");
        assert_eq!(info.title, None);
        assert_eq!(info.description.as_deref(), Some("Intro line"));
        assert_eq!(info.summary().as_deref(), Some("Intro line"));
        assert!(!info.has_installation);
    }

    #[test]
    fn test_summary_falls_back_to_title() {
        let info = parse_readme("# Only a title\n");
        assert_eq!(info.summary().as_deref(), Some("Only a title"));
    }

    #[test]
    fn test_find_readme_prefers_markdown() {
        let files = vec![
            file_record("README.txt", 3),
            file_record("docs/README.md", 3),
            file_record("Readme.md", 3),
        ];
        assert_eq!(find_readme(&files).map(|f| f.path.as_str()), Some("Readme.md"));

        let files = vec![file_record("readme.rst", 3)];
        assert_eq!(find_readme(&files).map(|f| f.path.as_str()), Some("readme.rst"));
        assert!(find_readme(&[]).is_none());
    }
}
