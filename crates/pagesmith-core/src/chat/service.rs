//! Chat pipeline orchestration.
//!
//! Each send appends the user message, calls the provider with the whole
//! conversation for context, and appends exactly one assistant message:
//! the model's text on success, or a readable rendering of the failure.
//! Errors never escape to the caller; the conversation always advances by
//! a full user/assistant pair.

use pagesmith_types::chat::Conversation;
use pagesmith_types::config::GlobalConfig;
use pagesmith_types::outcome::ModelOutcome;
use tracing::{debug, warn};

use crate::llm::classify::classify;
use crate::llm::provider::LlmProvider;
use crate::site::prompt;

/// Orchestrates the chat pipeline against a provider.
pub struct ChatService<P: LlmProvider> {
    provider: P,
    config: GlobalConfig,
}

impl<P: LlmProvider> ChatService<P> {
    pub fn new(provider: P, config: GlobalConfig) -> Self {
        Self { provider, config }
    }

    /// Run one exchange. A whitespace-only message is a no-op.
    pub async fn send(&self, conversation: &mut Conversation, text: &str) {
        if text.trim().is_empty() {
            debug!("empty message, skipping send");
            return;
        }

        conversation.push_user(text);
        let request = prompt::chat_request(conversation, &self.config);
        let outcome = classify(self.provider.complete(&request).await);

        let reply = match outcome {
            ModelOutcome::Success { text } => text,
            ModelOutcome::Empty => "(the model returned an empty response)".to_string(),
            other => {
                warn!(
                    provider = self.provider.name(),
                    kind = other.kind(),
                    "chat response classified as failure"
                );
                format!(
                    "Something went wrong ({}): {}",
                    other.kind(),
                    other.detail().unwrap_or("no detail available")
                )
            }
        };
        conversation.push_assistant(reply);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesmith_types::llm::{CompletionRequest, LlmError, MessageRole};
    use serde_json::{Value, json};
    use std::sync::Mutex;

    /// Provider that always answers with the same success body and records
    /// how many messages each request carried.
    struct EchoProvider {
        seen_lengths: Mutex<Vec<usize>>,
    }

    impl EchoProvider {
        fn new() -> Self {
            Self {
                seen_lengths: Mutex::new(Vec::new()),
            }
        }
    }

    impl LlmProvider for EchoProvider {
        fn name(&self) -> &str {
            "echo"
        }

        async fn complete(&self, request: &CompletionRequest) -> Result<Value, LlmError> {
            self.seen_lengths.lock().unwrap().push(request.messages.len());
            Ok(json!({"content": "echoed reply"}))
        }
    }

    struct FailingProvider;

    impl LlmProvider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        async fn complete(&self, _request: &CompletionRequest) -> Result<Value, LlmError> {
            Err(LlmError::Transport("broken pipe".to_string()))
        }
    }

    #[tokio::test]
    async fn test_n_sends_yield_2n_alternating_messages() {
        let svc = ChatService::new(EchoProvider::new(), GlobalConfig::default());
        let mut conv = Conversation::new();

        for i in 0..4 {
            svc.send(&mut conv, &format!("message {i}")).await;
        }

        assert_eq!(conv.len(), 8);
        for (i, message) in conv.messages().iter().enumerate() {
            let expected = if i % 2 == 0 {
                MessageRole::User
            } else {
                MessageRole::Assistant
            };
            assert_eq!(message.role, expected);
        }
    }

    #[tokio::test]
    async fn test_full_history_threaded_into_each_call() {
        let provider = EchoProvider::new();
        let svc = ChatService::new(provider, GlobalConfig::default());
        let mut conv = Conversation::new();

        svc.send(&mut conv, "one").await;
        svc.send(&mut conv, "two").await;

        let lengths = svc.provider.seen_lengths.lock().unwrap().clone();
        // First call: 1 message; second call: prior pair plus the new one.
        assert_eq!(lengths, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_whitespace_message_is_noop() {
        let svc = ChatService::new(EchoProvider::new(), GlobalConfig::default());
        let mut conv = Conversation::new();

        svc.send(&mut conv, "  \n ").await;

        assert!(conv.is_empty());
    }

    #[tokio::test]
    async fn test_failure_still_appends_assistant_message() {
        let svc = ChatService::new(FailingProvider, GlobalConfig::default());
        let mut conv = Conversation::new();

        svc.send(&mut conv, "hello?").await;

        assert_eq!(conv.len(), 2);
        let reply = &conv.messages()[1];
        assert_eq!(reply.role, MessageRole::Assistant);
        assert!(reply.content.contains("transport failure"));
        assert!(reply.content.contains("broken pipe"));
    }
}
