//! Architecture prompt template and rendering

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use super::context::ArchitectureContext;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").unwrap());

/// Prompt sent once per scan; `{{name}}` placeholders are filled from the context
pub const ARCHITECTURE_PROMPT: &str = r#"You are a software architect reviewing an unfamiliar codebase.

Describe the architecture of the project below using ONLY the information provided.

PROJECT: {{project_name}}
TYPE: {{project_type}}
LANGUAGES: {{languages}}
FRAMEWORKS: {{frameworks}}

DIRECTORIES:
{{directories}}

KEY FILES:
{{key_files}}

FILES (first {{shown_files}} of {{total_files}}):
{{files}}

Respond with a single JSON object and nothing else:
{
  "description": "Two or three sentences describing the overall architecture",
  "components": [
    {
      "name": "Component name",
      "type": "layer | service | module | data-store | utility | external",
      "description": "What this component is responsible for",
      "dependencies": ["Names of other components it uses"],
      "keyFiles": ["Relevant file paths"]
    }
  ],
  "diagram": "Optional Mermaid flowchart source"
}

Use component names consistently: every entry in "dependencies" must be the name of another component."#;

/// Substitute `{{name}}` placeholders; unknown names render as empty text
pub fn render_template(template: &str, values: &HashMap<&str, String>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &regex::Captures<'_>| {
            values.get(&caps[1]).cloned().unwrap_or_default()
        })
        .into_owned()
}

/// Render [`ARCHITECTURE_PROMPT`] for a context
pub fn render_prompt(context: &ArchitectureContext) -> String {
    let mut values: HashMap<&str, String> = HashMap::new();
    values.insert("project_name", context.project_name.clone());
    values.insert("project_type", context.project_type.to_string());
    values.insert("languages", inline_list(&context.languages));
    values.insert("frameworks", inline_list(&context.frameworks));
    values.insert(
        "directories",
        bullets(context.directories.iter().map(|d| {
            format!("{}/ - {} ({} files)", d.path, d.purpose, d.file_count)
        })),
    );
    values.insert(
        "key_files",
        bullets(
            context
                .key_files
                .iter()
                .map(|k| format!("{} [{}] {}", k.path, k.category, k.reason)),
        ),
    );
    values.insert("files", bullets(context.files.iter().cloned()));
    values.insert("shown_files", context.files.len().to_string());
    values.insert("total_files", context.total_files.to_string());

    render_template(ARCHITECTURE_PROMPT, &values)
}

fn inline_list(items: &[String]) -> String {
    if items.is_empty() {
        "none detected".to_string()
    } else {
        items.join(", ")
    }
}

fn bullets(items: impl Iterator<Item = String>) -> String {
    let lines: Vec<String> = items.map(|item| format!("- {}", item)).collect();
    if lines.is_empty() {
        "- none".to_string()
    } else {
        lines.join("\n")
    }
}
