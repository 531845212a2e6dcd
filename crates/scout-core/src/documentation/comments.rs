//! In-code comment statistics

/// Extensions using `//` and `/* */` comments
const C_FAMILY: &[&str] = &[
    "js", "jsx", "mjs", "cjs", "ts", "tsx", "java", "kt", "scala", "c", "h", "cpp", "cc", "hpp",
    "cs", "go", "rs", "swift", "dart", "php",
];

/// Comment counts for one file or an aggregate of files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentStats {
    /// `/** ... */` blocks
    pub jsdoc: usize,
    /// `/* ... */` blocks that are not JSDoc
    pub block: usize,
    /// Lines starting with `//` or `#`
    pub inline: usize,
    /// Python triple-quoted strings
    pub docstrings: usize,
}

impl CommentStats {
    pub fn total(&self) -> usize {
        self.jsdoc + self.block + self.inline + self.docstrings
    }

    pub fn add(&mut self, other: CommentStats) {
        self.jsdoc += other.jsdoc;
        self.block += other.block;
        self.inline += other.inline;
        self.docstrings += other.docstrings;
    }
}

/// Whether comments can be counted for this extension
pub fn supports_extension(extension: &str) -> bool {
    extension == "py" || C_FAMILY.contains(&extension)
}

/// Count comments by extension group; unsupported extensions yield zeros
pub fn extract_comments(content: &str, extension: &str) -> CommentStats {
    if extension == "py" {
        python_comments(content)
    } else if C_FAMILY.contains(&extension) {
        c_family_comments(content)
    } else {
        CommentStats::default()
    }
}

fn c_family_comments(content: &str) -> CommentStats {
    let mut stats = CommentStats::default();

    let mut rest = content;
    while let Some(start) = rest.find("/*") {
        let body = &rest[start + 2..];
        if body.starts_with('*') && !body.starts_with("*/") {
            stats.jsdoc += 1;
        } else {
            stats.block += 1;
        }
        match body.find("*/") {
            Some(end) => rest = &body[end + 2..],
            None => break,
        }
    }

    stats.inline = content
        .lines()
        .filter(|line| line.trim_start().starts_with("//"))
        .count();
    stats
}

fn python_comments(content: &str) -> CommentStats {
    let inline = content
        .lines()
        .enumerate()
        .filter(|(index, line)| {
            let line = line.trim_start();
            line.starts_with('#') && !(*index == 0 && line.starts_with("#!"))
        })
        .count();

    CommentStats {
        inline,
        docstrings: content.matches("\"\"\"").count() / 2 + content.matches("'''").count() / 2,
        ..Default::default()
    }
}
