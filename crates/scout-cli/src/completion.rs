//! OpenAI-compatible text completion over HTTP

use async_trait::async_trait;
use reqwest::Client;
use scout_core::config::LlmConfig;
use scout_core::{ScoutError, ScoutResult, TextCompletion};
use serde_json::{Value, json};

/// Single non-streaming chat completion request per prompt
pub struct HttpCompletion {
    http_client: Client,
    url: String,
    model: String,
    api_key: String,
}

impl HttpCompletion {
    pub fn new(config: &LlmConfig, api_key: impl Into<String>) -> ScoutResult<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ScoutError::llm(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            url: completions_url(&config.base_url),
            model: config.model.clone(),
            api_key: api_key.into(),
        })
    }

    /// Build a client when an endpoint is configured and its API key is set
    pub fn from_config(config: &LlmConfig) -> ScoutResult<Option<Self>> {
        if config.base_url.trim().is_empty() {
            return Ok(None);
        }
        match std::env::var(&config.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Self::new(config, key).map(Some),
            _ => {
                tracing::debug!(
                    "{} is not set; architecture synthesis disabled",
                    config.api_key_env
                );
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl TextCompletion for HttpCompletion {
    async fn complete(&self, prompt: &str) -> ScoutResult<String> {
        let request_body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let response = self
            .http_client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                ScoutError::llm_with_provider(format!("Request failed: {}", e), &self.model)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ScoutError::llm_with_provider(
                format!("API error (status {}): {}", status, error_text),
                &self.model,
            ));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| ScoutError::llm(format!("Failed to parse completion response: {}", e)))?;

        message_content(&response_json)
    }

    fn name(&self) -> &str {
        &self.model
    }
}

/// `{base}/v1/chat/completions`, tolerating a base that already ends in `/v1`
fn completions_url(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if base.ends_with("/v1") {
        format!("{}/chat/completions", base)
    } else {
        format!("{}/v1/chat/completions", base)
    }
}

fn message_content(response: &Value) -> ScoutResult<String> {
    response
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ScoutError::llm("Completion response has no message content"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_url() {
        assert_eq!(
            completions_url("https://api.openai.com"),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            completions_url("http://localhost:8080/v1/"),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn test_message_content() {
        let response = json!({
            "choices": [{ "message": { "role": "assistant", "content": "{\"description\": \"x\"}" } }]
        });
        assert_eq!(message_content(&response).unwrap(), "{\"description\": \"x\"}");

        let err = message_content(&json!({ "choices": [] })).unwrap_err();
        assert_eq!(err.error_code(), "SCOUT_LLM");
    }

    #[test]
    fn test_disabled_without_base_url() {
        let config = LlmConfig {
            base_url: String::new(),
            ..LlmConfig::default()
        };
        assert!(HttpCompletion::from_config(&config).unwrap().is_none());
    }
}
