//! The chat app: a transcript, a message box, and a clear button.

use axum::extract::{Form, Path, State};
use axum::response::{Html, Redirect};
use serde::Deserialize;
use uuid::Uuid;

use pagesmith_types::chat::{Conversation, MessageRole};

use crate::http::error::AppError;
use crate::http::handlers::parse_session;
use crate::http::render::{ContentItem, Page, render_page};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SendForm {
    pub message: String,
}

/// GET /s/{session}/chat
pub async fn show(
    State(state): State<AppState>,
    Path(session): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_session(&session)?;
    let conversation = state.session(id).chat;
    Ok(Html(render_page(&chat_page(id, &conversation))))
}

/// POST /s/{session}/chat/send
pub async fn send(
    State(state): State<AppState>,
    Path(session): Path<String>,
    Form(form): Form<SendForm>,
) -> Result<Redirect, AppError> {
    let id = parse_session(&session)?;

    // Snapshot only the conversation; write back the same record so an
    // overlapping transition on another app is not lost.
    let mut conversation = state.session(id).chat;
    state.chat_service.send(&mut conversation, &form.message).await;
    state.store_chat(id, conversation);

    Ok(Redirect::to(&format!("/s/{id}/chat")))
}

/// POST /s/{session}/chat/clear
pub async fn clear(
    State(state): State<AppState>,
    Path(session): Path<String>,
) -> Result<Redirect, AppError> {
    let id = parse_session(&session)?;
    state.store_chat(id, Conversation::new());

    Ok(Redirect::to(&format!("/s/{id}/chat")))
}

fn chat_page(id: Uuid, conversation: &Conversation) -> Page {
    let mut items = vec![ContentItem::Heading("Chat".to_string())];

    if conversation.is_empty() {
        items.push(ContentItem::Text("No messages yet. Say hello!".to_string()));
    }
    for message in conversation.messages() {
        let speaker = match message.role {
            MessageRole::User => "you",
            MessageRole::Assistant => "model",
        };
        items.push(ContentItem::Text(format!("{speaker}: {}", message.content)));
    }

    items.push(ContentItem::Form {
        action: format!("/s/{id}/chat/send"),
        items: vec![
            ContentItem::TextInput {
                name: "message".to_string(),
                value: String::new(),
            },
            ContentItem::Button("Send".to_string()),
        ],
    });
    if !conversation.is_empty() {
        items.push(ContentItem::Form {
            action: format!("/s/{id}/chat/clear"),
            items: vec![ContentItem::Button("Clear".to_string())],
        });
    }
    items.push(ContentItem::Link {
        label: "All apps".to_string(),
        href: format!("/s/{id}"),
    });

    Page::new("Chat", items)
}
