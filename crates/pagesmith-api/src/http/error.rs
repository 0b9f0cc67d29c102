//! Application error type mapping to HTTP status codes.
//!
//! The pipeline itself never fails -- every model outcome renders as a
//! page. What can still go wrong at this layer is request-shaped: a
//! malformed session id. That renders as a plain error document with the
//! right status.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use pagesmith_types::error::SessionError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Session lookup/parse errors.
    Session(SessionError),
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        AppError::Session(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Session(e) => (StatusCode::BAD_REQUEST, e.to_string()),
        };

        let body = format!(
            "<!DOCTYPE html>\n<html><head><title>Error</title></head>\
             <body><h1>{status}</h1><p>{}</p>\
             <p><a href=\"/\">Start over</a></p></body></html>\n",
            escape(&message)
        );
        (status, Html(body)).into_response()
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_session_maps_to_bad_request() {
        let response =
            AppError::Session(SessionError::InvalidId("zzz".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
