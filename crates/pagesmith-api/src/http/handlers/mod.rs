//! HTTP transition handlers, one module per app.

pub mod chat;
pub mod pages;
pub mod site;
pub mod studio;

use uuid::Uuid;

use pagesmith_types::error::SessionError;

use crate::http::error::AppError;

/// Parse the session id path segment.
pub(crate) fn parse_session(id: &str) -> Result<Uuid, AppError> {
    id.parse()
        .map_err(|_| AppError::Session(SessionError::InvalidId(id.to_string())))
}
