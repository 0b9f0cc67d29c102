//! The three-block website builder app (HTML, CSS, and JS as separately
//! delimited regions).

use axum::extract::{Form, Path, State};
use axum::response::{Html, Redirect};
use serde::Deserialize;
use uuid::Uuid;

use pagesmith_types::build::{BuildRecord, SiteBundle};

use crate::http::error::AppError;
use crate::http::handlers::parse_session;
use crate::http::render::{ContentItem, Page, paren_escape, render_page};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BuildForm {
    pub description: String,
}

/// GET /s/{session}/studio
pub async fn show(
    State(state): State<AppState>,
    Path(session): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_session(&session)?;
    let record = state.session(id).studio;
    Ok(Html(render_page(&studio_page(id, &record))))
}

/// POST /s/{session}/studio/build
pub async fn build(
    State(state): State<AppState>,
    Path(session): Path<String>,
    Form(form): Form<BuildForm>,
) -> Result<Redirect, AppError> {
    let id = parse_session(&session)?;

    // Snapshot only the record this transition owns; write back the same
    // record so an overlapping transition on another app is not lost.
    let mut record = state.session(id).studio;
    state
        .site_service
        .run_bundle_build(&mut record, &form.description)
        .await;
    state.store_studio(id, record);

    Ok(Redirect::to(&format!("/s/{id}/studio")))
}

/// POST /s/{session}/studio/clear
pub async fn clear(
    State(state): State<AppState>,
    Path(session): Path<String>,
) -> Result<Redirect, AppError> {
    let id = parse_session(&session)?;
    state.store_studio(id, BuildRecord::new());

    Ok(Redirect::to(&format!("/s/{id}/studio")))
}

/// GET /s/{session}/studio/debug -- pure read, no transition.
pub async fn debug(
    State(state): State<AppState>,
    Path(session): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_session(&session)?;
    let record = state.session(id).studio;

    let raw = record
        .last_raw_response
        .as_deref()
        .unwrap_or("(no response yet)");

    let mut items = vec![
        ContentItem::Heading("Studio debug".to_string()),
        ContentItem::Text(format!("Last description: {}", record.last_description)),
        ContentItem::Heading("Raw model response".to_string()),
        ContentItem::Pre(paren_escape(raw)),
    ];
    if let Some(bundle) = &record.last_build {
        for (label, region) in [
            ("Extracted HTML", &bundle.html),
            ("Extracted CSS", &bundle.css),
            ("Extracted JS", &bundle.js),
        ] {
            items.push(ContentItem::Heading(label.to_string()));
            items.push(ContentItem::Pre(paren_escape(region)));
        }
    }
    items.push(ContentItem::Link {
        label: "Back to studio".to_string(),
        href: format!("/s/{id}/studio"),
    });

    Ok(Html(render_page(&Page::new("Studio debug", items))))
}

fn studio_page(id: Uuid, record: &BuildRecord<SiteBundle>) -> Page {
    let mut items = vec![
        ContentItem::Heading("Website studio".to_string()),
        ContentItem::Text(
            "Describe the page; structure, style, and behavior come back as separate blocks:"
                .to_string(),
        ),
        ContentItem::Form {
            action: format!("/s/{id}/studio/build"),
            items: vec![
                ContentItem::TextArea {
                    name: "description".to_string(),
                    value: record.last_description.clone(),
                },
                ContentItem::Button("Build".to_string()),
            ],
        },
    ];

    if let Some(bundle) = &record.last_build {
        if !bundle.html.is_empty() {
            items.push(ContentItem::Heading("Previous build".to_string()));
            // Regions are re-displayed verbatim; the style and script
            // blocks apply to the embedded structure.
            items.push(ContentItem::EmbeddedHtml(bundle.html.clone()));
            if !bundle.css.is_empty() {
                items.push(ContentItem::EmbeddedHtml(bundle.css.clone()));
            }
            if !bundle.js.is_empty() {
                items.push(ContentItem::EmbeddedHtml(bundle.js.clone()));
            }
        }
    }

    if record.has_build() {
        items.push(ContentItem::Form {
            action: format!("/s/{id}/studio/clear"),
            items: vec![ContentItem::Button("Clear".to_string())],
        });
    }

    items.push(ContentItem::Link {
        label: "Debug view".to_string(),
        href: format!("/s/{id}/studio/debug"),
    });
    items.push(ContentItem::Link {
        label: "All apps".to_string(),
        href: format!("/s/{id}"),
    });

    Page::new("Website studio", items)
}
