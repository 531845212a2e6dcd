//! Configuration for Scout
//!
//! Layering: built-in defaults, then the config file (TOML, YAML or JSON by
//! extension), then `SCOUT_*` environment variables. The merged result is
//! validated before use.

mod env_loader;
mod file_loader;
mod logging_config;

pub use env_loader::{apply_env_overrides, apply_env_overrides_with};
pub use file_loader::load_from_file;
pub use logging_config::{LogFormat, LoggingConfig};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ScoutError, ScoutResult};

/// Default location of the user config file
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".scout").join("config.toml"))
}

/// Load configuration from `path` (or the default location), apply
/// environment overrides and validate.
pub fn load_config(path: Option<&Path>) -> ScoutResult<ScoutConfig> {
    let mut config = match path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(path) => load_from_file(&path)?,
        None => ScoutConfig::default(),
    };
    apply_env_overrides(&mut config)?;
    config.validate()?;
    Ok(config)
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoutConfig {
    pub scan: ScanConfig,
    pub storage: StorageConfig,
    pub llm: LlmConfig,
    pub logging: LoggingConfig,
}

impl ScoutConfig {
    /// Reject settings the pipeline cannot run with
    pub fn validate(&self) -> ScoutResult<()> {
        if self.scan.max_files == 0 {
            return Err(ScoutError::config("scan.max_files must be greater than zero"));
        }
        if self.scan.max_file_size_bytes == 0 {
            return Err(ScoutError::config(
                "scan.max_file_size_bytes must be greater than zero",
            ));
        }
        if self.storage.dir.trim().is_empty() {
            return Err(ScoutError::config("storage.dir must not be empty"));
        }
        if !self.llm.base_url.is_empty() && self.llm.model.trim().is_empty() {
            return Err(ScoutError::config(
                "llm.model must be set when llm.base_url is configured",
            ));
        }
        if self.llm.timeout.is_zero() {
            return Err(ScoutError::config("llm.timeout must be greater than zero"));
        }
        Ok(())
    }
}

/// Tree scanner limits and exclusions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Maximum number of files recorded per scan
    pub max_files: usize,
    /// Files at or above this size are not read for line counts
    pub max_file_size_bytes: u64,
    /// Gitignore-style patterns always excluded from the walk
    pub exclude_patterns: Vec<String>,
    /// Also honour the project's root `.gitignore`
    pub respect_gitignore: bool,
    /// Never call the text-completion capability
    pub skip_llm: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_files: 5000,
            max_file_size_bytes: 1024 * 1024,
            exclude_patterns: [
                "node_modules",
                "target",
                ".git",
                "__pycache__",
                "venv",
                ".venv",
                "dist",
                "build",
                ".next",
                ".nuxt",
                "coverage",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            respect_gitignore: true,
            skip_llm: false,
        }
    }
}

/// Where scans are persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Storage root; `~` and environment variables are expanded
    pub dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: "~/.scout/projects".to_string(),
        }
    }
}

impl StorageConfig {
    /// Storage root with `~` and `$VARS` expanded. Unknown variables are left
    /// as written.
    pub fn resolved_dir(&self) -> PathBuf {
        let expanded = shellexpand::full(&self.dir)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| shellexpand::tilde(&self.dir).into_owned());
        PathBuf::from(expanded)
    }
}

/// Text-completion endpoint settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// OpenAI-compatible endpoint root; empty disables the model
    pub base_url: String,
    pub model: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    /// Upper bound for one completion request
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            timeout: Duration::from_secs(120),
        }
    }
}
