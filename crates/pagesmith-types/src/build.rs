//! Build artifacts and the per-session build record.
//!
//! A build is replaced wholesale on every attempt, success or failure;
//! it is never merged with a prior build. `BuildRecord` is generic over
//! the artifact type so the single-document and three-block builder apps
//! share one lifecycle.

use serde::{Deserialize, Serialize};

/// A generated page as one self-contained HTML document (CSS/JS inlined).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitePage {
    pub html: String,
}

impl SitePage {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

/// A generated page as three separately delimited regions.
///
/// Any field may legitimately be empty: absence of a region in the model's
/// output empties only that field, not the whole bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteBundle {
    pub html: String,
    pub css: String,
    pub js: String,
}

/// The visible application state of a builder app.
///
/// Invariants:
/// - `last_build` is `Some` iff at least one build attempt has completed.
/// - `last_raw_response` holds the literal provider text whenever any text
///   was obtainable; once set it is only cleared by [`BuildRecord::reset`].
///   `None` is distinct from an empty string ("no response yet").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRecord<B> {
    pub last_build: Option<B>,
    pub last_description: String,
    pub last_raw_response: Option<String>,
}

impl<B> BuildRecord<B> {
    /// A record with no completed attempt.
    pub fn new() -> Self {
        Self {
            last_build: None,
            last_description: String::new(),
            last_raw_response: None,
        }
    }

    /// Install the result of a completed build attempt.
    ///
    /// The build and description are replaced wholesale. The raw response
    /// is only overwritten when new text exists; a `None` (nothing was
    /// obtained from the provider) leaves any earlier raw response intact.
    pub fn install(&mut self, build: B, description: String, raw_response: Option<String>) {
        self.last_build = Some(build);
        self.last_description = description;
        if raw_response.is_some() {
            self.last_raw_response = raw_response;
        }
    }

    /// Return to the initial-equivalent state.
    pub fn reset(&mut self) {
        self.last_build = None;
        self.last_description.clear();
        self.last_raw_response = None;
    }

    /// Whether any build attempt has completed.
    pub fn has_build(&self) -> bool {
        self.last_build.is_some()
    }
}
