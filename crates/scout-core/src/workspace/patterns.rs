//! Key file identification
//!
//! Rules are independent: a file matched by two rules produces two entries.
//! Output follows rule order, then scanner order within a rule.

use glob::{MatchOptions, Pattern};

use super::manifest::PackageManifest;
use super::models::{FileRecord, KeyFile, KeyFileCategory};

/// A file-name rule for key files
struct KeyFileRule {
    patterns: &'static [&'static str],
    category: KeyFileCategory,
    reason: &'static str,
}

const KEY_FILE_RULES: &[KeyFileRule] = &[
    KeyFileRule {
        patterns: &["README*"],
        category: KeyFileCategory::Documentation,
        reason: "Project README",
    },
    KeyFileRule {
        patterns: &["tsconfig.json", ".eslintrc*"],
        category: KeyFileCategory::Config,
        reason: "Tooling configuration",
    },
    KeyFileRule {
        patterns: &["package.json", "Cargo.toml", "pyproject.toml", "go.mod"],
        category: KeyFileCategory::Config,
        reason: "Package manifest",
    },
    KeyFileRule {
        patterns: &["vite.config.*", "webpack.config.*", "rollup.config.*"],
        category: KeyFileCategory::BuildConfig,
        reason: "Bundler configuration",
    },
    KeyFileRule {
        patterns: &["Dockerfile", "docker-compose.y*ml"],
        category: KeyFileCategory::BuildConfig,
        reason: "Container build definition",
    },
    KeyFileRule {
        patterns: &["vitest.config.*", "jest.config.*"],
        category: KeyFileCategory::TestSetup,
        reason: "Test runner configuration",
    },
    KeyFileRule {
        patterns: &["schema.prisma", "*.graphql", "*.gql"],
        category: KeyFileCategory::Schema,
        reason: "Schema definition",
    },
];

/// Only `README*` is matched case-insensitively
fn match_options(pattern: &str) -> MatchOptions {
    MatchOptions {
        case_sensitive: !pattern.starts_with("README"),
        require_literal_separator: true,
        require_literal_leading_dot: false,
    }
}

/// Identify key files from the scanned list and the optional root manifest
pub fn identify_key_files(
    files: &[FileRecord],
    manifest: Option<&PackageManifest>,
) -> Vec<KeyFile> {
    let mut key_files = entry_points(files, manifest);

    for rule in KEY_FILE_RULES {
        let compiled: Vec<(Pattern, MatchOptions)> = rule
            .patterns
            .iter()
            .filter_map(|p| Pattern::new(p).ok().map(|pattern| (pattern, match_options(p))))
            .collect();

        for file in files {
            let matched = compiled
                .iter()
                .any(|(pattern, options)| pattern.matches_with(&file.name, *options));
            if matched {
                key_files.push(KeyFile {
                    path: file.path.clone(),
                    reason: rule.reason.to_string(),
                    category: rule.category,
                    summary: None,
                });
            }
        }
    }

    key_files
}

/// Manifest `main` and `bin` targets that exist in the scanned list
fn entry_points(files: &[FileRecord], manifest: Option<&PackageManifest>) -> Vec<KeyFile> {
    let Some(manifest) = manifest else {
        return Vec::new();
    };

    let mut declared: Vec<(&str, &str)> = Vec::new();
    if let Some(main) = manifest.main.as_deref() {
        declared.push((main, "Package main entry"));
    }
    for bin in manifest.bin.paths() {
        declared.push((bin, "Package bin entry"));
    }

    declared
        .into_iter()
        .filter_map(|(target, reason)| {
            let normalized = target.strip_prefix("./").unwrap_or(target);
            files
                .iter()
                .find(|f| f.path == normalized)
                .map(|f| KeyFile {
                    path: f.path.clone(),
                    reason: reason.to_string(),
                    category: KeyFileCategory::EntryPoint,
                    summary: None,
                })
        })
        .collect()
}
