//! The classified result of one model invocation.
//!
//! Every call to the provider reduces to exactly one [`ModelOutcome`]
//! variant. Downstream code matches this closed set instead of probing
//! response shapes at runtime.

use serde::{Deserialize, Serialize};

/// Outcome of one model invocation, produced once at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelOutcome {
    /// Usable text was obtained.
    Success { text: String },

    /// The provider returned a body describing a failure.
    StructuredError { message: String },

    /// The body had an unrecognized shape and no text could be recovered.
    MalformedShape { detail: String },

    /// The call itself failed before any body was obtained.
    TransportFailure { detail: String },

    /// A body was classified as text-bearing, but the text is empty or
    /// whitespace-only.
    Empty,
}

impl ModelOutcome {
    /// Short human-readable label for the variant, used in error pages
    /// and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ModelOutcome::Success { .. } => "success",
            ModelOutcome::StructuredError { .. } => "provider error",
            ModelOutcome::MalformedShape { .. } => "malformed response",
            ModelOutcome::TransportFailure { .. } => "transport failure",
            ModelOutcome::Empty => "empty response",
        }
    }

    /// The failure detail carried by an error variant, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ModelOutcome::Success { .. } => None,
            ModelOutcome::StructuredError { message } => Some(message),
            ModelOutcome::MalformedShape { detail } => Some(detail),
            ModelOutcome::TransportFailure { detail } => Some(detail),
            ModelOutcome::Empty => None,
        }
    }
}
