//! Core error type for Scout

use thiserror::Error;

/// Result type alias for Scout operations
pub type ScoutResult<T> = Result<T, ScoutError>;

/// Main error type for Scout
#[derive(Error, Debug, Clone)]
pub enum ScoutError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// Text-completion provider errors
    #[error("LLM error: {message}")]
    Llm {
        message: String,
        provider: Option<String>,
        context: Option<String>,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        context: Option<String>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        context: Option<String>,
    },

    /// Persistence errors
    #[error("Storage error: {message}")]
    Storage {
        message: String,
        context: Option<String>,
    },

    /// Invalid input errors
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        field: Option<String>,
        context: Option<String>,
    },

    /// Operation timed out
    #[error("Timed out after {seconds} seconds")]
    Timeout {
        seconds: u64,
        context: Option<String>,
    },

    /// Generic error with context
    #[error("Error: {message}")]
    Other {
        message: String,
        context: Option<String>,
    },
}

impl ScoutError {
    /// Stable code for programmatic error handling
    pub fn error_code(&self) -> &str {
        match self {
            Self::Config { .. } => "SCOUT_CONFIG",
            Self::Llm { .. } => "SCOUT_LLM",
            Self::Io { .. } => "SCOUT_IO",
            Self::Json { .. } => "SCOUT_JSON",
            Self::Storage { .. } => "SCOUT_STORAGE",
            Self::InvalidInput { .. } => "SCOUT_INVALID_INPUT",
            Self::Timeout { .. } => "SCOUT_TIMEOUT",
            Self::Other { .. } => "SCOUT_OTHER",
        }
    }

    /// Human-readable message without the variant prefix
    pub fn message(&self) -> &str {
        match self {
            Self::Config { message, .. } => message,
            Self::Llm { message, .. } => message,
            Self::Io { message, .. } => message,
            Self::Json { message, .. } => message,
            Self::Storage { message, .. } => message,
            Self::InvalidInput { message, .. } => message,
            Self::Timeout { .. } => "Operation timed out",
            Self::Other { message, .. } => message,
        }
    }

    /// Additional context, if any was attached
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Config { context, .. }
            | Self::Llm { context, .. }
            | Self::Io { context, .. }
            | Self::Json { context, .. }
            | Self::Storage { context, .. }
            | Self::InvalidInput { context, .. }
            | Self::Timeout { context, .. }
            | Self::Other { context, .. } => context.as_deref(),
        }
    }

    /// Whether retrying the same operation could succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Llm { .. } | Self::Timeout { .. })
    }
}
