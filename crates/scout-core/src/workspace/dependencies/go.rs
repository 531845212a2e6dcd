//! go.mod dependency parser for Go projects

use crate::workspace::models::DependencyEntry;

/// Parse `require` directives from `go.mod`, skipping `// indirect` lines
pub fn parse_go_mod(content: &str) -> Vec<DependencyEntry> {
    let mut deps = Vec::new();
    let mut in_require = false;

    for line in content.lines() {
        let line = line.trim();

        if in_require {
            if line.starts_with(')') {
                in_require = false;
            } else if let Some(dep) = module_entry(line) {
                deps.push(dep);
            }
            continue;
        }

        let Some(rest) = line.strip_prefix("require") else {
            continue;
        };
        if rest.trim_start().starts_with('(') {
            in_require = true;
        } else if rest.starts_with(char::is_whitespace) {
            if let Some(dep) = module_entry(rest.trim_start()) {
                deps.push(dep);
            }
        }
    }

    deps
}

/// `<module> <version>` with an optional trailing comment
fn module_entry(line: &str) -> Option<DependencyEntry> {
    if line.contains("// indirect") {
        return None;
    }
    let line = line.split("//").next().unwrap_or_default();

    let mut parts = line.split_whitespace();
    let module = parts.next()?;
    let version = parts.next()?;
    Some(DependencyEntry::new(module, Some(version.to_string())))
}
