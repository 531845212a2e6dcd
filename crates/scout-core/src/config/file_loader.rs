//! File-based configuration loading

use std::fs;
use std::path::Path;

use super::ScoutConfig;
use crate::error::{ScoutError, ScoutResult};

/// Load configuration from a file
///
/// Supports TOML, YAML and JSON based on the file extension (TOML when the
/// extension is unknown). Returns the default config if the file doesn't exist.
pub fn load_from_file(path: &Path) -> ScoutResult<ScoutConfig> {
    if !path.exists() {
        tracing::debug!("No config file at {}, using defaults", path.display());
        return Ok(ScoutConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        ScoutError::config_with_context(
            format!("Failed to read config file: {}", e),
            format!("Reading configuration from '{}'", path.display()),
        )
    })?;

    let config: ScoutConfig = match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| {
            ScoutError::config_with_context(
                format!("Failed to parse YAML config: {}", e),
                format!("Deserializing YAML configuration from '{}'", path.display()),
            )
        })?,
        Some("json") => serde_json::from_str(&content).map_err(|e| {
            ScoutError::config_with_context(
                format!("Failed to parse JSON config: {}", e),
                format!("Deserializing JSON configuration from '{}'", path.display()),
            )
        })?,
        _ => toml::from_str(&content).map_err(|e| {
            ScoutError::config_with_context(
                format!("Failed to parse TOML config: {}", e),
                format!("Deserializing TOML configuration from '{}'", path.display()),
            )
        })?,
    };

    tracing::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_from_file(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(config, ScoutConfig::default());
    }

    #[test]
    fn test_load_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[scan]
max_files = 100
exclude_patterns = ["vendor"]

[llm]
model = "local-model"
timeout = "30s"
"#,
        )
        .unwrap();

        let config = load_from_file(&path).unwrap();
        assert_eq!(config.scan.max_files, 100);
        assert_eq!(config.scan.exclude_patterns, vec!["vendor"]);
        assert!(config.scan.respect_gitignore);
        assert_eq!(config.llm.model, "local-model");
        assert_eq!(config.llm.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_load_yaml_and_json() {
        let temp = TempDir::new().unwrap();

        let yaml = temp.path().join("config.yaml");
        fs::write(&yaml, "storage:\n  dir: /data/scans\nlogging:\n  format: json\n").unwrap();
        let config = load_from_file(&yaml).unwrap();
        assert_eq!(config.storage.dir, "/data/scans");
        assert_eq!(config.logging.format, crate::config::LogFormat::Json);

        let json = temp.path().join("config.json");
        fs::write(&json, r#"{ "scan": { "skip_llm": true } }"#).unwrap();
        let config = load_from_file(&json).unwrap();
        assert!(config.scan.skip_llm);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[scan\nmax_files = ").unwrap();

        let err = load_from_file(&path).unwrap_err();
        assert_eq!(err.error_code(), "SCOUT_CONFIG");
        assert!(err.context().is_some());
    }
}
