//! Tolerant parsing of the model's architecture response

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

use super::{ArchitectureComponent, ArchitectureSummary, ComponentType};

static FENCED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(?:json|JSON)?[ \t]*\n?(.*?)\s*```").unwrap());

/// Body of the first code fence in `text`, or the trimmed text when there is
/// none. Prose around the fence is dropped.
pub fn strip_code_fence(text: &str) -> &str {
    FENCED
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| text.trim(), |body| body.as_str())
}

/// Parse a response into a summary. Anything that is not a JSON object yields
/// the empty summary; malformed components are dropped individually.
pub fn parse_architecture_response(text: &str) -> ArchitectureSummary {
    let parsed = serde_json::from_str::<Value>(text.trim())
        .or_else(|_| serde_json::from_str::<Value>(strip_code_fence(text)));
    let value = match parsed {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("Architecture response is not JSON: {}", e);
            return ArchitectureSummary::default();
        }
    };
    let Some(object) = value.as_object() else {
        return ArchitectureSummary::default();
    };

    let components: Vec<ArchitectureComponent> = object
        .get("components")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(parse_component).collect())
        .unwrap_or_default();

    ArchitectureSummary {
        description: object
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        components,
        diagram: object
            .get("diagram")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string),
    }
}

fn parse_component(value: &Value) -> Option<ArchitectureComponent> {
    let object = value.as_object()?;

    Some(ArchitectureComponent {
        name: string_field(object, "name")?,
        component_type: ComponentType::parse(&string_field(object, "type")?),
        description: string_field(object, "description")?,
        dependencies: string_array(object, "dependencies")?,
        key_files: string_array(object, "keyFiles")?,
    })
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key)?.as_str().map(str::to_string)
}

/// Non-string array items are skipped
fn string_array(object: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    let items = object.get(key)?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
    )
}
