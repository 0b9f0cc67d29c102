//! LlmProvider trait definition.
//!
//! This is the core abstraction the pipeline runs against. Uses native
//! async fn in traits (RPITIT, Rust 2024 edition).
//!
//! `complete` returns the *raw* JSON body of the exchange whenever a body
//! was obtained, regardless of HTTP status. Provider-reported failures,
//! odd shapes, and plain-text bodies all come back as `Ok(Value)` and are
//! reduced to a [`pagesmith_types::outcome::ModelOutcome`] by
//! [`crate::llm::classify::classify`]. Only faults that prevent any body
//! from being obtained (connect errors, timeouts, unreadable responses)
//! are `Err`.
//!
//! Implementations live in pagesmith-infra (e.g., `AnthropicProvider`).

use pagesmith_types::llm::{CompletionRequest, LlmError};

/// Trait for LLM provider backends.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "anthropic").
    fn name(&self) -> &str;

    /// Send a completion request and receive the raw response body.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<serde_json::Value, LlmError>> + Send;
}
