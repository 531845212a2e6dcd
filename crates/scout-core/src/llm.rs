//! Text-completion capability consumed by the architecture synthesizer
//!
//! The core never talks to a model provider directly. Front ends supply an
//! implementation of [`TextCompletion`]; tests use the generated mock.

use async_trait::async_trait;

use crate::error::ScoutResult;

/// A single prompt in, a single free-form text response out.
///
/// No schema is enforced on the response: callers must tolerate any text,
/// including non-JSON.
///
/// # Example
///
/// ```ignore
/// struct Canned;
///
/// #[async_trait]
/// impl TextCompletion for Canned {
///     async fn complete(&self, _prompt: &str) -> ScoutResult<String> {
///         Ok(r#"{"description": "demo", "components": []}"#.to_string())
///     }
///
///     fn name(&self) -> &str {
///         "canned"
///     }
/// }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextCompletion: Send + Sync {
    /// Send one non-streaming request
    async fn complete(&self, prompt: &str) -> ScoutResult<String>;

    /// Provider or model identifier used in logs
    fn name(&self) -> &str;
}
