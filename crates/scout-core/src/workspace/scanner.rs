//! Depth-first tree scanner producing per-file metadata

use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;

use super::ignore_rules::IgnorePredicate;
use super::models::FileRecord;

/// Extensions whose files are read to count lines
const TEXT_EXTENSIONS: &[&str] = &[
    "rs", "ts", "tsx", "js", "jsx", "mjs", "cjs", "py", "pyi", "go", "java", "kt", "kts",
    "scala", "cs", "cpp", "cc", "cxx", "hpp", "c", "h", "rb", "php", "swift", "m", "dart",
    "lua", "r", "ex", "exs", "erl", "hs", "ml", "clj", "zig", "pl", "sh", "bash", "zsh", "sql",
    "html", "htm", "css", "scss", "sass", "less", "vue", "svelte", "json", "yaml", "yml",
    "toml", "xml", "md", "markdown", "rst", "txt", "graphql", "gql", "prisma", "ini", "cfg",
];

/// Walk `root` and return metadata for at most `max_files` files.
///
/// Entries whose root-relative path is ignored are skipped (directories are
/// not descended into). Unreadable files and directories are omitted from the
/// result; a missing root yields an empty list.
pub fn scan(
    root: &Path,
    ignore: &dyn IgnorePredicate,
    max_files: usize,
    max_file_size_bytes: u64,
) -> Vec<FileRecord> {
    let mut records = Vec::new();
    if max_files == 0 || !root.is_dir() {
        return records;
    }

    let mut walker = TreeWalker {
        ignore,
        max_files,
        max_file_size_bytes,
        records: &mut records,
    };
    walker.visit(root, "");

    tracing::debug!("Scanned {} files under {}", records.len(), root.display());
    records
}

struct TreeWalker<'a> {
    ignore: &'a dyn IgnorePredicate,
    max_files: usize,
    max_file_size_bytes: u64,
    records: &'a mut Vec<FileRecord>,
}

impl TreeWalker<'_> {
    fn is_full(&self) -> bool {
        self.records.len() >= self.max_files
    }

    fn visit(&mut self, dir: &Path, prefix: &str) {
        if self.is_full() {
            return;
        }

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("Skipping unreadable directory {}: {}", dir.display(), e);
                return;
            }
        };

        let mut entries: Vec<_> = entries.flatten().collect();
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            if self.is_full() {
                return;
            }

            let name = entry.file_name().to_string_lossy().to_string();
            let relative = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{}/{}", prefix, name)
            };
            let path = entry.path();

            let Ok(file_type) = entry.file_type() else {
                continue;
            };

            if file_type.is_dir() {
                if !self.ignore.is_ignored(&relative, true) {
                    self.visit(&path, &relative);
                }
                continue;
            }

            // Follow file symlinks; directory symlinks are not traversed.
            let Ok(metadata) = fs::metadata(&path) else {
                continue;
            };
            if !metadata.is_file() || self.ignore.is_ignored(&relative, false) {
                continue;
            }

            if let Some(record) = self.build_record(&path, relative, name, &metadata) {
                self.records.push(record);
            }
        }
    }

    fn build_record(
        &self,
        path: &Path,
        relative: String,
        name: String,
        metadata: &fs::Metadata,
    ) -> Option<FileRecord> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        let size_bytes = metadata.len();
        let modified_at = metadata
            .modified()
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| Utc::now());

        let line_count = if is_text_extension(&extension) && size_bytes < self.max_file_size_bytes
        {
            match fs::read(path) {
                Ok(bytes) => Some(count_lines(&bytes)),
                Err(e) => {
                    tracing::debug!("Skipping unreadable file {}: {}", path.display(), e);
                    return None;
                }
            }
        } else {
            None
        };

        Some(FileRecord {
            path: relative,
            name,
            language: extension_to_language(&extension).map(str::to_string),
            extension,
            size_bytes,
            modified_at,
            line_count,
        })
    }
}

/// Number of `\n`-delimited segments; never less than one
pub fn count_lines(bytes: &[u8]) -> usize {
    bytes.iter().filter(|b| **b == b'\n').count() + 1
}

/// Whether files with this extension are read for line counting
pub fn is_text_extension(ext: &str) -> bool {
    TEXT_EXTENSIONS.contains(&ext.to_lowercase().as_str())
}

/// Map file extension to language name
pub fn extension_to_language(ext: &str) -> Option<&'static str> {
    match ext.to_lowercase().as_str() {
        "rs" => Some("Rust"),
        "ts" | "tsx" => Some("TypeScript"),
        "js" | "jsx" | "mjs" | "cjs" => Some("JavaScript"),
        "py" | "pyi" => Some("Python"),
        "go" => Some("Go"),
        "java" => Some("Java"),
        "kt" | "kts" => Some("Kotlin"),
        "scala" | "sc" => Some("Scala"),
        "cs" => Some("C#"),
        "cpp" | "cc" | "cxx" | "hpp" => Some("C++"),
        "c" | "h" => Some("C"),
        "m" | "mm" => Some("Objective-C"),
        "rb" => Some("Ruby"),
        "php" => Some("PHP"),
        "swift" => Some("Swift"),
        "dart" => Some("Dart"),
        "lua" => Some("Lua"),
        "r" => Some("R"),
        "ex" | "exs" => Some("Elixir"),
        "erl" => Some("Erlang"),
        "hs" => Some("Haskell"),
        "ml" => Some("OCaml"),
        "clj" => Some("Clojure"),
        "zig" => Some("Zig"),
        "pl" => Some("Perl"),
        "sh" | "bash" | "zsh" => Some("Shell"),
        "ps1" => Some("PowerShell"),
        "sql" => Some("SQL"),
        "html" | "htm" => Some("HTML"),
        "css" => Some("CSS"),
        "scss" | "sass" => Some("SCSS"),
        "less" => Some("Less"),
        "vue" => Some("Vue"),
        "svelte" => Some("Svelte"),
        "json" => Some("JSON"),
        "yaml" | "yml" => Some("YAML"),
        "toml" => Some("TOML"),
        "xml" => Some("XML"),
        "md" | "markdown" => Some("Markdown"),
        "graphql" | "gql" => Some("GraphQL"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::ignore_rules::IgnoreRules;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_missing_root_yields_empty() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        let rules = IgnoreRules::empty(temp.path());
        assert!(scan(&missing, &rules, 100, 1024).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_entries_are_omitted() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a.rs", "fn a() {}\n");
        std::os::unix::fs::symlink(temp.path().join("gone.rs"), temp.path().join("dangling.rs"))
            .unwrap();

        let rules = IgnoreRules::empty(temp.path());
        let files = scan(temp.path(), &rules, 100, 1024 * 1024);

        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["a.rs"]);
    }

    #[test]
    fn test_records_language_and_lines() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "src/main.rs", "fn main() {\n}\n");
        write(temp.path(), "logo.png", "not really a png");

        let rules = IgnoreRules::empty(temp.path());
        let files = scan(temp.path(), &rules, 100, 1024 * 1024);

        let main = files.iter().find(|f| f.path == "src/main.rs").unwrap();
        assert_eq!(main.name, "main.rs");
        assert_eq!(main.extension, "rs");
        assert_eq!(main.language.as_deref(), Some("Rust"));
        assert_eq!(main.line_count, Some(3));

        let logo = files.iter().find(|f| f.path == "logo.png").unwrap();
        assert_eq!(logo.line_count, None);
        assert_eq!(logo.language, None);
    }

    #[test]
    fn test_line_count_skipped_above_size_limit() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "big.txt", &"line\n".repeat(100));

        let rules = IgnoreRules::empty(temp.path());
        let files = scan(temp.path(), &rules, 100, 10);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].line_count, None);
    }

    #[test]
    fn test_ignored_directories_not_descended() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "node_modules/pkg/index.js", "x");
        write(temp.path(), "src/index.js", "x");

        let rules = IgnoreRules::build(temp.path(), &["node_modules".to_string()], false);
        let files = scan(temp.path(), &rules, 100, 1024);
        let paths: Vec<_> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["src/index.js"]);
    }

    #[test]
    fn test_max_files_is_exact_cap() {
        let temp = TempDir::new().unwrap();
        for i in 0..12 {
            write(temp.path(), &format!("dir{}/file{}.ts", i % 3, i), "export {}\n");
        }

        let rules = IgnoreRules::empty(temp.path());
        let files = scan(temp.path(), &rules, 5, 1024);
        assert_eq!(files.len(), 5);
        assert!(files.iter().all(|f| f.line_count == Some(2)));
    }

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines(b""), 1);
        assert_eq!(count_lines(b"a"), 1);
        assert_eq!(count_lines(b"a\n"), 2);
        assert_eq!(count_lines(b"a\nb\nc"), 3);
    }
}
