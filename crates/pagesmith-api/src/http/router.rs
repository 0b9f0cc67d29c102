//! Axum router configuration with middleware.
//!
//! All app routes are session-scoped under `/s/{session}/`.
//! Middleware: CORS, tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::pages::root_redirect))
        .route("/s/{session}", get(handlers::pages::session_index))
        // Single-document builder
        .route("/s/{session}/site", get(handlers::site::show))
        .route("/s/{session}/site/build", post(handlers::site::build))
        .route("/s/{session}/site/clear", post(handlers::site::clear))
        .route("/s/{session}/site/debug", get(handlers::site::debug))
        // Three-block builder
        .route("/s/{session}/studio", get(handlers::studio::show))
        .route("/s/{session}/studio/build", post(handlers::studio::build))
        .route("/s/{session}/studio/clear", post(handlers::studio::clear))
        .route("/s/{session}/studio/debug", get(handlers::studio::debug))
        // Chat
        .route("/s/{session}/chat", get(handlers::chat::show))
        .route("/s/{session}/chat/send", post(handlers::chat::send))
        .route("/s/{session}/chat/clear", post(handlers::chat::clear))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
