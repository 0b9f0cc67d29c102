//! Conversation log for the chat app.

use serde::{Deserialize, Serialize};

// Re-export the message types (used in both chat and llm contexts).
pub use crate::llm::{Message, MessageRole};

/// Append-only ordered log of exchanged messages.
///
/// Insertion order is chronological. The core never deduplicates or
/// truncates the log; it grows for the lifetime of the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(Message::assistant(content));
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop the whole log, returning to the initial-equivalent state.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut conv = Conversation::new();
        conv.push_user("first");
        conv.push_assistant("second");
        conv.push_user("third");

        let roles: Vec<MessageRole> = conv.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![MessageRole::User, MessageRole::Assistant, MessageRole::User]
        );
        assert_eq!(conv.messages()[2].content, "third");
    }

    #[test]
    fn test_clear_empties_log() {
        let mut conv = Conversation::new();
        conv.push_user("hello");
        assert!(!conv.is_empty());

        conv.clear();
        assert!(conv.is_empty());
        assert_eq!(conv.len(), 0);
    }
}
