//! Architecture synthesis
//!
//! Sends a bounded project context to the text-completion capability, keeps
//! only well-formed components from the response, and draws a dependency
//! diagram when the model does not provide one. Every failure on this path
//! degrades to an empty summary.

mod context;
mod mermaid;
mod prompt;
mod response;

pub use context::{ArchitectureContext, MAX_CONTEXT_FILES};
pub use mermaid::generate_mermaid;
pub use prompt::{ARCHITECTURE_PROMPT, render_prompt, render_template};
pub use response::{parse_architecture_response, strip_code_fence};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{ScoutError, ScoutResult};
use crate::llm::TextCompletion;

/// Role of an architecture component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentType {
    Layer,
    Service,
    Module,
    DataStore,
    Utility,
    External,
}

impl ComponentType {
    /// Lenient parse of a model-supplied type. Unknown values become `Module`.
    pub fn parse(value: &str) -> Self {
        let normalized: String = value
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        match normalized.as_str() {
            "layer" => Self::Layer,
            "service" => Self::Service,
            "datastore" | "database" | "storage" => Self::DataStore,
            "utility" | "util" | "utilities" => Self::Utility,
            "external" => Self::External,
            _ => Self::Module,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Layer => "layer",
            Self::Service => "service",
            Self::Module => "module",
            Self::DataStore => "data-store",
            Self::Utility => "utility",
            Self::External => "external",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One inferred logical unit of the codebase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectureComponent {
    pub name: String,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub description: String,
    /// Names of other components
    pub dependencies: Vec<String>,
    pub key_files: Vec<String>,
}

/// Architecture section of a scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchitectureSummary {
    pub description: String,
    pub components: Vec<ArchitectureComponent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagram: Option<String>,
}

/// Produces an [`ArchitectureSummary`] from a project context
#[derive(Clone)]
pub struct ArchitectureSynthesizer {
    completion: Option<Arc<dyn TextCompletion>>,
    timeout: Duration,
}

impl ArchitectureSynthesizer {
    pub fn new(completion: Option<Arc<dyn TextCompletion>>, timeout: Duration) -> Self {
        Self {
            completion,
            timeout,
        }
    }

    /// Invoke the model once and parse its answer.
    ///
    /// Returns the empty summary without calling anything when `skip_llm` is
    /// set or no completion capability is configured. Model errors, timeouts
    /// and unparseable responses also yield the empty summary.
    pub async fn synthesize(
        &self,
        context: &ArchitectureContext,
        skip_llm: bool,
    ) -> ArchitectureSummary {
        let completion = match (&self.completion, skip_llm) {
            (Some(completion), false) => completion,
            _ => {
                tracing::debug!("Skipping architecture synthesis for {}", context.project_name);
                return ArchitectureSummary::default();
            }
        };

        let text = match self.request(completion.as_ref(), context).await {
            Ok(text) => text,
            Err(e) if e.is_retryable() => {
                tracing::warn!("Architecture completion failed, rescan to retry: {}", e);
                return ArchitectureSummary::default();
            }
            Err(e) => {
                tracing::warn!("Architecture completion failed: {}", e);
                return ArchitectureSummary::default();
            }
        };

        let mut summary = parse_architecture_response(&text);
        if summary.diagram.is_none() && !summary.components.is_empty() {
            summary.diagram = Some(generate_mermaid(&summary.components));
        }
        summary
    }

    /// One bounded completion call
    async fn request(
        &self,
        completion: &dyn TextCompletion,
        context: &ArchitectureContext,
    ) -> ScoutResult<String> {
        let prompt = render_prompt(context);
        tracing::debug!(
            "Requesting architecture from {} ({} prompt chars)",
            completion.name(),
            prompt.len()
        );

        tokio::time::timeout(self.timeout, completion.complete(&prompt))
            .await
            .map_err(|_| ScoutError::timeout(self.timeout.as_secs()))?
    }
}
