//! Environment variable overrides
//!
//! Recognised variables: `SCOUT_STORAGE_DIR`, `SCOUT_MAX_FILES`,
//! `SCOUT_LLM_MODEL`, `SCOUT_LLM_BASE_URL`, `SCOUT_LOG_LEVEL`.

use std::env;

use super::ScoutConfig;
use crate::error::{ScoutError, ScoutResult};

/// Apply overrides from the process environment
pub fn apply_env_overrides(config: &mut ScoutConfig) -> ScoutResult<()> {
    apply_env_overrides_with(config, |key| env::var(key).ok())
}

/// Apply overrides using a custom variable lookup
pub fn apply_env_overrides_with<F>(config: &mut ScoutConfig, lookup: F) -> ScoutResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = lookup("SCOUT_STORAGE_DIR") {
        config.storage.dir = dir;
    }

    if let Some(max_files) = lookup("SCOUT_MAX_FILES") {
        config.scan.max_files = max_files.trim().parse().map_err(|_| {
            ScoutError::config(format!("Invalid SCOUT_MAX_FILES value: {}", max_files))
        })?;
    }

    if let Some(model) = lookup("SCOUT_LLM_MODEL") {
        config.llm.model = model;
    }

    if let Some(base_url) = lookup("SCOUT_LLM_BASE_URL") {
        config.llm.base_url = base_url;
    }

    if let Some(level) = lookup("SCOUT_LOG_LEVEL") {
        config.logging.level = level;
    }

    Ok(())
}
