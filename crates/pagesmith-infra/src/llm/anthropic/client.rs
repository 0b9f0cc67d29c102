//! AnthropicProvider -- concrete [`LlmProvider`] implementation for the
//! Anthropic Messages API (`/v1/messages`).
//!
//! The client returns the raw JSON body for any completed exchange,
//! including non-2xx statuses: provider-reported failures are ordinary
//! bodies for the pipeline to classify, not transport errors. A body that
//! is not valid JSON comes back as a JSON string value so the last-resort
//! stringification path still applies. Only faults that prevent a body
//! from being obtained at all (connect errors, timeouts, unreadable
//! responses) surface as [`LlmError::Transport`].
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in Debug output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use pagesmith_core::llm::provider::LlmProvider;
use pagesmith_types::llm::{CompletionRequest, LlmError};

use super::types::{AnthropicMessage, AnthropicRequest};

/// Anthropic Claude LLM provider.
#[derive(Clone)]
pub struct AnthropicProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl AnthropicProvider {
    /// The Anthropic API version header value.
    const API_VERSION: &'static str = "2023-06-01";

    /// Create a new Anthropic provider.
    pub fn new(api_key: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://api.anthropic.com".to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Convert a generic [`CompletionRequest`] into an [`AnthropicRequest`].
    fn to_anthropic_request(&self, request: &CompletionRequest) -> AnthropicRequest {
        let messages = request
            .messages
            .iter()
            .map(|m| AnthropicMessage {
                role: m.role.to_string(),
                content: m.content.clone(),
            })
            .collect();

        AnthropicRequest {
            model: request.model.clone(),
            max_tokens: request.max_tokens,
            messages,
            system: request.system.clone(),
            temperature: request.temperature,
        }
    }
}

// AnthropicProvider intentionally does NOT derive Debug. The SecretString
// field ensures the API key is never printed, and omitting Debug entirely
// removes the temptation.

impl LlmProvider for AnthropicProvider {
    fn name(&self) -> &str {
        "anthropic"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<Value, LlmError> {
        let body = self.to_anthropic_request(request);
        let url = self.url("/v1/messages");

        let response = self
            .client
            .post(&url)
            .header("x-api-key", self.api_key.expose_secret())
            .header("anthropic-version", Self::API_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Transport(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::Transport(format!("failed to read response body: {e}")))?;

        tracing::debug!(status = %status, bytes = text.len(), "provider response received");

        // Any obtained body is handed to classification as-is.
        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesmith_types::llm::Message;

    fn make_provider() -> AnthropicProvider {
        AnthropicProvider::new(SecretString::from("test-key-not-real"))
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(make_provider().name(), "anthropic");
    }

    #[test]
    fn test_base_url_override() {
        let provider = make_provider().with_base_url("http://localhost:8080".to_string());
        assert_eq!(
            provider.url("/v1/messages"),
            "http://localhost:8080/v1/messages"
        );
    }

    #[test]
    fn test_to_anthropic_request() {
        let provider = make_provider();
        let request = CompletionRequest {
            model: "claude-sonnet-4-20250514".to_string(),
            messages: vec![Message::user("Hello")],
            system: Some("Be terse".to_string()),
            max_tokens: 1024,
            temperature: Some(0.7),
        };

        let wire = provider.to_anthropic_request(&request);
        assert_eq!(wire.model, "claude-sonnet-4-20250514");
        assert_eq!(wire.messages.len(), 1);
        assert_eq!(wire.messages[0].role, "user");
        assert_eq!(wire.system.as_deref(), Some("Be terse"));
        assert_eq!(wire.max_tokens, 1024);
    }
}
