//! Session bootstrap and the per-session app index.

use axum::extract::Path;
use axum::response::{Html, Redirect};
use uuid::Uuid;

use crate::http::error::AppError;
use crate::http::handlers::parse_session;
use crate::http::render::{ContentItem, Page, render_page};

/// GET / -- mint a session and land on its index.
pub async fn root_redirect() -> Redirect {
    Redirect::to(&format!("/s/{}", Uuid::now_v7()))
}

/// GET /s/{session} -- list the apps available in this session.
pub async fn session_index(Path(session): Path<String>) -> Result<Html<String>, AppError> {
    let id = parse_session(&session)?;

    let page = Page::new(
        "Pagesmith",
        vec![
            ContentItem::Heading("Pagesmith".to_string()),
            ContentItem::Text(
                "Describe what you want in plain English; the model builds it.".to_string(),
            ),
            ContentItem::Link {
                label: "Website builder (single document)".to_string(),
                href: format!("/s/{id}/site"),
            },
            ContentItem::Link {
                label: "Website studio (HTML / CSS / JS)".to_string(),
                href: format!("/s/{id}/studio"),
            },
            ContentItem::Link {
                label: "Chat".to_string(),
                href: format!("/s/{id}/chat"),
            },
        ],
    );
    Ok(Html(render_page(&page)))
}
