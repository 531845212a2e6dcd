//! Structural check applied to stored scans before deserializing

use serde_json::Value;

use crate::scan::ProjectScan;

#[derive(Clone, Copy)]
enum Shape {
    String,
    Object,
    Array,
}

const REQUIRED_KEYS: &[(&str, Shape)] = &[
    ("version", Shape::String),
    ("scannedAt", Shape::String),
    ("projectId", Shape::String),
    ("projectName", Shape::String),
    ("projectPath", Shape::String),
    ("overview", Shape::Object),
    ("directoryStructure", Shape::Array),
    ("keyFiles", Shape::Array),
    ("documentation", Shape::Object),
    ("dependencies", Shape::Object),
    ("architecture", Shape::Object),
];

/// Check that every top-level scan key is present with the right JSON type
pub fn validate_scan_shape(value: &Value) -> Result<(), String> {
    let object = value
        .as_object()
        .ok_or_else(|| "scan is not a JSON object".to_string())?;

    for (key, shape) in REQUIRED_KEYS {
        let field = object
            .get(*key)
            .ok_or_else(|| format!("missing key '{}'", key))?;
        let matches = match shape {
            Shape::String => field.is_string(),
            Shape::Object => field.is_object(),
            Shape::Array => field.is_array(),
        };
        if !matches {
            return Err(format!("key '{}' has the wrong type", key));
        }
    }
    Ok(())
}

/// Parse stored scan content; any failure is logged and yields `None`
pub fn parse_scan(content: &str) -> Option<ProjectScan> {
    let value: Value = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("Stored scan is not valid JSON: {}", e);
            return None;
        }
    };

    if let Err(reason) = validate_scan_shape(&value) {
        tracing::debug!("Stored scan failed shape check: {}", reason);
        return None;
    }

    match serde_json::from_value(value) {
        Ok(scan) => Some(scan),
        Err(e) => {
            tracing::debug!("Stored scan could not be deserialized: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_scan;

    #[test]
    fn test_valid_scan_passes() {
        let value = serde_json::to_value(sample_scan("demo-1234abcd")).unwrap();
        assert!(validate_scan_shape(&value).is_ok());
    }

    #[test]
    fn test_missing_and_mistyped_keys() {
        let mut value = serde_json::to_value(sample_scan("demo-1234abcd")).unwrap();
        value["keyFiles"] = Value::String("nope".into());
        assert_eq!(
            validate_scan_shape(&value).unwrap_err(),
            "key 'keyFiles' has the wrong type"
        );

        value.as_object_mut().unwrap().remove("architecture");
        assert!(validate_scan_shape(&value).is_err());
        assert!(validate_scan_shape(&Value::Null).is_err());
    }

    #[test]
    fn test_parse_scan() {
        let scan = sample_scan("demo-1234abcd");
        let json = serde_json::to_string(&scan).unwrap();
        assert_eq!(parse_scan(&json), Some(scan));

        assert_eq!(parse_scan("{ truncated"), None);
        assert_eq!(parse_scan(r#"{"version": "1.0.0"}"#), None);
    }
}
