//! Language ranking by line count

use std::collections::HashMap;

use crate::workspace::models::FileRecord;

/// Total lines attributed to one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageShare {
    pub language: String,
    pub lines: usize,
}

/// Sum line counts per language, sorted by lines descending (ties by name).
/// Files without a language or a line count contribute nothing.
pub fn language_line_totals(files: &[FileRecord]) -> Vec<LanguageShare> {
    let mut totals: HashMap<&str, usize> = HashMap::new();

    for file in files {
        if let (Some(language), Some(lines)) = (file.language.as_deref(), file.line_count) {
            *totals.entry(language).or_default() += lines;
        }
    }

    let mut shares: Vec<LanguageShare> = totals
        .into_iter()
        .map(|(language, lines)| LanguageShare {
            language: language.to_string(),
            lines,
        })
        .collect();
    shares.sort_by(|a, b| b.lines.cmp(&a.lines).then_with(|| a.language.cmp(&b.language)));
    shares
}

/// Languages ordered by total lines, most used first
pub fn rank_languages(files: &[FileRecord]) -> Vec<String> {
    language_line_totals(files)
        .into_iter()
        .map(|share| share.language)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn file(path: &str, language: Option<&str>, lines: Option<usize>) -> FileRecord {
        FileRecord {
            path: path.to_string(),
            name: path.rsplit('/').next().unwrap_or(path).to_string(),
            extension: String::new(),
            size_bytes: 0,
            modified_at: Utc::now(),
            line_count: lines,
            language: language.map(str::to_string),
        }
    }

    #[test]
    fn test_rank_by_total_lines() {
        let files = vec![
            file("a.py", Some("Python"), Some(10)),
            file("b.ts", Some("TypeScript"), Some(30)),
            file("c.py", Some("Python"), Some(25)),
            file("d.bin", None, Some(500)),
            file("e.rs", Some("Rust"), None),
        ];

        assert_eq!(rank_languages(&files), vec!["Python", "TypeScript"]);
        let totals = language_line_totals(&files);
        assert_eq!(totals[0].lines, 35);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_languages(&[]).is_empty());
    }
}
