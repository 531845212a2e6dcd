//! From trait implementations for ScoutError conversions

use super::types::ScoutError;

impl From<std::io::Error> for ScoutError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for ScoutError {
    fn from(error: serde_json::Error) -> Self {
        Self::json(error.to_string())
    }
}

impl From<toml::de::Error> for ScoutError {
    fn from(error: toml::de::Error) -> Self {
        Self::config(format!("Invalid TOML: {}", error))
    }
}

impl From<serde_yaml::Error> for ScoutError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::config(format!("Invalid YAML: {}", error))
    }
}

impl From<tokio::task::JoinError> for ScoutError {
    fn from(error: tokio::task::JoinError) -> Self {
        Self::other(format!("Background task failed: {}", error))
    }
}
