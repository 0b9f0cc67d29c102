//! Prompt construction for the builder and chat apps.
//!
//! Pure functions: a fixed template with the user's description
//! interpolated, packed into a single user-role message. Callers must
//! check the trimmed description is non-empty before building -- a
//! whitespace-only description short-circuits the whole pipeline.

use pagesmith_types::chat::Conversation;
use pagesmith_types::config::GlobalConfig;
use pagesmith_types::llm::{CompletionRequest, Message};

/// Template for the single-document builder: everything inlined, strict
/// delimiters, no commentary outside the tags.
const PAGE_TEMPLATE: &str = "\
Build a complete single-file web page for the following description:

{description}

Respond with exactly one HTML document between <html> and </html> tags. \
Inline all CSS in a <style> element and all JavaScript in a <script> \
element inside that document. Be compact: no commentary, no markdown \
fences, nothing outside the <html> tags.";

/// Template for the three-block builder: separately delimited regions.
const BUNDLE_TEMPLATE: &str = "\
Build a web page for the following description:

{description}

Respond with three sections, in this order:
1. the page structure between <html> and </html> tags
2. the stylesheet between <style> and </style> tags
3. the behavior between <script> and </script> tags
Do not add commentary outside the tags.";

/// Request for the single-document builder.
pub fn page_request(description: &str, config: &GlobalConfig) -> CompletionRequest {
    request_from_template(PAGE_TEMPLATE, description, config)
}

/// Request for the three-block builder.
pub fn bundle_request(description: &str, config: &GlobalConfig) -> CompletionRequest {
    request_from_template(BUNDLE_TEMPLATE, description, config)
}

/// Request threading the whole conversation back in for context.
pub fn chat_request(conversation: &Conversation, config: &GlobalConfig) -> CompletionRequest {
    CompletionRequest {
        model: config.model.clone(),
        messages: conversation.messages().to_vec(),
        system: None,
        max_tokens: config.max_tokens,
        temperature: config.temperature,
    }
}

fn request_from_template(
    template: &str,
    description: &str,
    config: &GlobalConfig,
) -> CompletionRequest {
    CompletionRequest {
        model: config.model.clone(),
        messages: vec![Message::user(
            template.replace("{description}", description),
        )],
        system: None,
        max_tokens: config.max_tokens,
        temperature: config.temperature,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesmith_types::llm::MessageRole;

    #[test]
    fn test_page_request_single_user_message() {
        let config = GlobalConfig::default();
        let request = page_request("a page with a red button", &config);

        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, MessageRole::User);
        assert!(request.messages[0].content.contains("a page with a red button"));
        assert!(request.messages[0].content.contains("<html>"));
        assert_eq!(request.model, config.model);
        assert_eq!(request.max_tokens, config.max_tokens);
    }

    #[test]
    fn test_bundle_request_names_all_regions() {
        let config = GlobalConfig::default();
        let request = bundle_request("a countdown timer", &config);

        let content = &request.messages[0].content;
        assert!(content.contains("a countdown timer"));
        assert!(content.contains("<style>"));
        assert!(content.contains("<script>"));
    }

    #[test]
    fn test_chat_request_threads_whole_conversation() {
        let config = GlobalConfig::default();
        let mut conv = Conversation::new();
        conv.push_user("hello");
        conv.push_assistant("hi!");
        conv.push_user("what's a monad?");

        let request = chat_request(&conv, &config);
        assert_eq!(request.messages.len(), 3);
        assert_eq!(request.messages[2].content, "what's a monad?");
    }
}
