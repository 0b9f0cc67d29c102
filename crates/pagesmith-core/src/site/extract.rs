//! First-occurrence delimiter extraction.
//!
//! The model is instructed to wrap its output in known tags; we only need
//! substring search, not a markup parser. Absence of a marker yields an
//! empty string -- a build with an empty field is legitimate and the
//! renderer simply skips it.

use pagesmith_types::build::SiteBundle;

/// Inclusive substring from the first occurrence of `open` through the end
/// of the first occurrence of `close` after it. Empty if either is absent.
pub fn extract_block(text: &str, open: &str, close: &str) -> String {
    let Some(start) = text.find(open) else {
        return String::new();
    };
    match text[start..].find(close) {
        Some(rel) => text[start..start + rel + close.len()].to_string(),
        None => String::new(),
    }
}

/// The delimited HTML document inside free-form model output.
pub fn extract_document(text: &str) -> String {
    extract_block(text, "<html", "</html>")
}

/// The three separately delimited regions of a bundle response.
///
/// Regions are extracted independently: a missing region empties only its
/// own field.
pub fn extract_bundle(text: &str) -> SiteBundle {
    SiteBundle {
        html: extract_document(text),
        css: extract_block(text, "<style", "</style>"),
        js: extract_block(text, "<script", "</script>"),
    }
}
