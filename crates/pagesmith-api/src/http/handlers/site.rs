//! The single-document website builder app.
//!
//! Four operations per the app's lifecycle: display, build (runs the
//! full pipeline and always lands in a built state), clear (back to the
//! initial-equivalent state), and the read-only debug view.

use axum::extract::{Form, Path, State};
use axum::response::{Html, Redirect};
use serde::Deserialize;
use uuid::Uuid;

use pagesmith_types::build::{BuildRecord, SitePage};

use crate::http::error::AppError;
use crate::http::handlers::parse_session;
use crate::http::render::{ContentItem, Page, paren_escape, render_page};
use crate::state::AppState;

/// Form body for the build transition.
#[derive(Debug, Deserialize)]
pub struct BuildForm {
    pub description: String,
}

/// GET /s/{session}/site
pub async fn show(
    State(state): State<AppState>,
    Path(session): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_session(&session)?;
    let record = state.session(id).site;
    Ok(Html(render_page(&site_page(id, &record))))
}

/// POST /s/{session}/site/build
pub async fn build(
    State(state): State<AppState>,
    Path(session): Path<String>,
    Form(form): Form<BuildForm>,
) -> Result<Redirect, AppError> {
    let id = parse_session(&session)?;

    // Snapshot only the record this transition owns; write back the same
    // record so an overlapping transition on another app is not lost.
    let mut record = state.session(id).site;
    state
        .site_service
        .run_page_build(&mut record, &form.description)
        .await;
    state.store_site(id, record);

    Ok(Redirect::to(&format!("/s/{id}/site")))
}

/// POST /s/{session}/site/clear
pub async fn clear(
    State(state): State<AppState>,
    Path(session): Path<String>,
) -> Result<Redirect, AppError> {
    let id = parse_session(&session)?;
    state.store_site(id, BuildRecord::new());

    Ok(Redirect::to(&format!("/s/{id}/site")))
}

/// GET /s/{session}/site/debug -- pure read, no transition.
pub async fn debug(
    State(state): State<AppState>,
    Path(session): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_session(&session)?;
    let record = state.session(id).site;

    let raw = record
        .last_raw_response
        .as_deref()
        .unwrap_or("(no response yet)");
    let extracted = record
        .last_build
        .as_ref()
        .map(|b| b.html.as_str())
        .unwrap_or("(no build yet)");

    let page = Page::new(
        "Site debug",
        vec![
            ContentItem::Heading("Site debug".to_string()),
            ContentItem::Text(format!("Last description: {}", record.last_description)),
            ContentItem::Heading("Raw model response".to_string()),
            ContentItem::Pre(paren_escape(raw)),
            ContentItem::Heading("Extracted HTML".to_string()),
            ContentItem::Pre(paren_escape(extracted)),
            ContentItem::Link {
                label: "Back to builder".to_string(),
                href: format!("/s/{id}/site"),
            },
        ],
    );
    Ok(Html(render_page(&page)))
}

fn site_page(id: Uuid, record: &BuildRecord<SitePage>) -> Page {
    let mut items = vec![
        ContentItem::Heading("Website builder".to_string()),
        ContentItem::Text("Describe the page you want built:".to_string()),
        ContentItem::Form {
            action: format!("/s/{id}/site/build"),
            items: vec![
                ContentItem::TextInput {
                    name: "description".to_string(),
                    value: record.last_description.clone(),
                },
                ContentItem::Button("Build".to_string()),
            ],
        },
    ];

    // An empty extracted document is a legitimate build; only show the
    // preview when there is something to display.
    if let Some(build) = &record.last_build {
        if !build.html.is_empty() {
            items.push(ContentItem::Heading("Previous build".to_string()));
            items.push(ContentItem::EmbeddedHtml(build.html.clone()));
        }
    }

    if record.has_build() {
        items.push(ContentItem::Form {
            action: format!("/s/{id}/site/clear"),
            items: vec![ContentItem::Button("Clear".to_string())],
        });
    }

    items.push(ContentItem::Link {
        label: "Debug view".to_string(),
        href: format!("/s/{id}/site/debug"),
    });
    items.push(ContentItem::Link {
        label: "All apps".to_string(),
        href: format!("/s/{id}"),
    });

    Page::new("Website builder", items)
}
