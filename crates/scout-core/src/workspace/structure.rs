//! Top-level directory structure analysis

use std::collections::{BTreeMap, HashMap};

use super::models::{DirectoryEntry, FileRecord};

const DEFAULT_PURPOSE: &str = "Project files";

/// Purpose for a well-known top-level directory name
pub fn directory_purpose(name: &str) -> &'static str {
    match name {
        "src" | "lib" => "Source code",
        "tests" | "test" | "__tests__" | "spec" => "Test files",
        "docs" | "doc" | "documentation" => "Documentation",
        "scripts" | "bin" => "Scripts and executables",
        "config" | "configs" | ".config" => "Configuration",
        "public" | "static" | "assets" => "Static assets",
        "components" => "UI components",
        "pages" | "app" | "routes" => "Application routes",
        "api" | "server" => "API / server code",
        "packages" | "crates" | "modules" => "Workspace packages",
        "cmd" => "Command entry points",
        "internal" | "pkg" => "Internal packages",
        "examples" | "demos" => "Examples",
        "migrations" | "prisma" | "db" => "Database schema and migrations",
        ".github" => "CI/CD configuration",
        "styles" | "css" => "Stylesheets",
        "types" | "typings" => "Type definitions",
        "utils" | "helpers" => "Utilities",
        _ => DEFAULT_PURPOSE,
    }
}

#[derive(Default)]
struct DirectoryTally<'a> {
    file_count: usize,
    lines_by_language: HashMap<&'a str, usize>,
}

/// Group files by top-level directory. Files at the root are excluded.
/// Output is sorted by file count descending, ties by path.
pub fn analyze_directories(files: &[FileRecord]) -> Vec<DirectoryEntry> {
    let mut tallies: BTreeMap<&str, DirectoryTally> = BTreeMap::new();

    for file in files {
        let Some(dir) = file.top_level_dir() else {
            continue;
        };
        let tally = tallies.entry(dir).or_default();
        tally.file_count += 1;
        if let (Some(language), Some(lines)) = (file.language.as_deref(), file.line_count) {
            *tally.lines_by_language.entry(language).or_default() += lines;
        }
    }

    let mut entries: Vec<DirectoryEntry> = tallies
        .into_iter()
        .map(|(dir, tally)| DirectoryEntry {
            path: dir.to_string(),
            purpose: directory_purpose(dir).to_string(),
            file_count: tally.file_count,
            primary_language: tally
                .lines_by_language
                .into_iter()
                .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
                .map(|(language, _)| language.to_string()),
        })
        .collect();

    // BTreeMap order is already by path, so a stable sort keeps ties by path.
    entries.sort_by(|a, b| b.file_count.cmp(&a.file_count));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::file_record;

    #[test]
    fn test_groups_by_top_level_dir() {
        let files = vec![
            file_record("README.md", 5),
            file_record("src/a.ts", 10),
            file_record("src/b.ts", 10),
            file_record("src/c.py", 50),
            file_record("tests/a.test.ts", 3),
            file_record("misc/notes.txt", 3),
        ];
        let dirs = analyze_directories(&files);

        assert_eq!(dirs.len(), 3);
        assert_eq!(dirs[0].path, "src");
        assert_eq!(dirs[0].file_count, 3);
        assert_eq!(dirs[0].purpose, "Source code");
        assert_eq!(dirs[0].primary_language.as_deref(), Some("Python"));

        assert_eq!(dirs[1].path, "misc");
        assert_eq!(dirs[1].purpose, "Project files");
        assert_eq!(dirs[1].primary_language, None);
        assert_eq!(dirs[2].purpose, "Test files");
    }

    #[test]
    fn test_root_files_only() {
        let files = vec![file_record("index.js", 1)];
        assert!(analyze_directories(&files).is_empty());
    }
}
