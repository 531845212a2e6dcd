//! Ignore predicate used to prune the directory walk
//!
//! The scanner only needs a boolean answer per root-relative path. The default
//! implementation combines configured exclude patterns with the project's root
//! `.gitignore`, interpreted with gitignore semantics by the `ignore` crate.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;

/// Decides whether a root-relative path is skipped during scanning
pub trait IgnorePredicate: Send + Sync {
    /// `relative_path` uses `/` separators; `is_dir` allows directory-only
    /// patterns such as `target/` to match.
    fn is_ignored(&self, relative_path: &str, is_dir: bool) -> bool;
}

/// Gitignore-style rules built from exclude patterns and `.gitignore`
#[derive(Debug, Clone)]
pub struct IgnoreRules {
    matcher: Gitignore,
}

impl IgnoreRules {
    /// Rules that never ignore anything except `.git`
    pub fn empty(root: &Path) -> Self {
        Self::build(root, &[], false)
    }

    /// Build rules for `root` from exclude patterns, optionally reading the
    /// root `.gitignore`. Unparseable lines are skipped.
    pub fn build(root: &Path, exclude_patterns: &[String], respect_gitignore: bool) -> Self {
        let mut builder = GitignoreBuilder::new(root);

        if let Err(e) = builder.add_line(None, ".git/") {
            tracing::debug!("Skipping built-in ignore pattern: {}", e);
        }
        for pattern in exclude_patterns {
            if let Err(e) = builder.add_line(None, pattern) {
                tracing::debug!("Skipping invalid exclude pattern '{}': {}", pattern, e);
            }
        }

        if respect_gitignore {
            let gitignore = root.join(".gitignore");
            if gitignore.is_file() {
                if let Some(e) = builder.add(&gitignore) {
                    tracing::debug!("Partial .gitignore parse in {}: {}", root.display(), e);
                }
            }
        }

        let matcher = builder.build().unwrap_or_else(|e| {
            tracing::warn!("Falling back to empty ignore rules: {}", e);
            Gitignore::empty()
        });

        Self { matcher }
    }
}

impl IgnorePredicate for IgnoreRules {
    fn is_ignored(&self, relative_path: &str, is_dir: bool) -> bool {
        self.matcher.matched(relative_path, is_dir).is_ignore()
    }
}
