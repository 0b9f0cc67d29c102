//! Reduces a raw provider response (or the transport error raised in its
//! place) to exactly one [`ModelOutcome`].
//!
//! The precedence below is load-bearing. A provider error body can
//! incidentally look like several shapes at once (e.g., carry both a
//! `"parts"` sequence and a `"message"` field); classification must be a
//! total function of the input, so the checks run in a fixed order:
//!
//! 1. transport error
//! 2. recognized success body (`content` field)
//! 3. `"parts"` assembly
//! 4. generic error object (`message` field, else nested `error.message`,
//!    else the object's JSON form)
//! 5. last-resort stringification of anything else
//!
//! Text recovered by 2/3/5 that is whitespace-only demotes to `Empty`.

use pagesmith_types::llm::LlmError;
use pagesmith_types::outcome::ModelOutcome;
use serde_json::Value;

/// Classify the result of one provider call.
pub fn classify(result: Result<Value, LlmError>) -> ModelOutcome {
    let value = match result {
        Ok(value) => value,
        Err(e) => {
            return ModelOutcome::TransportFailure {
                detail: e.to_string(),
            };
        }
    };

    if let Some(text) = success_text(&value) {
        return text_outcome(text);
    }

    if let Some(obj) = value.as_object() {
        if let Some(parts) = obj.get("parts") {
            return match assemble_parts(parts) {
                Ok(text) => text_outcome(text),
                Err(detail) => ModelOutcome::MalformedShape { detail },
            };
        }
        let message = obj
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .or_else(|| {
                obj.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| value.to_string());
        return ModelOutcome::StructuredError { message };
    }

    text_outcome(stringify(&value))
}

/// The literal text of a response body, for the debug surface.
///
/// A string body is taken verbatim; anything else is pretty-printed JSON.
pub fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

fn text_outcome(text: String) -> ModelOutcome {
    if text.trim().is_empty() {
        ModelOutcome::Empty
    } else {
        ModelOutcome::Success { text }
    }
}

/// Text from a recognized success body: an object whose `content` field is
/// either a string or a sequence of text blocks.
fn success_text(value: &Value) -> Option<String> {
    let content = value.as_object()?.get("content")?;
    match content {
        Value::String(s) => Some(s.clone()),
        Value::Array(blocks) => Some(
            blocks
                .iter()
                .filter_map(|block| block.get("text").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join(""),
        ),
        _ => None,
    }
}

/// Concatenate a `"parts"` sequence: object chunks contribute their `text`
/// field, falling back to `content`, falling back to the empty string;
/// non-object chunks contribute their string form. No separator.
fn assemble_parts(parts: &Value) -> Result<String, String> {
    let chunks = parts
        .as_array()
        .ok_or_else(|| format!("'parts' is not a sequence: {parts}"))?;

    let mut text = String::new();
    for chunk in chunks {
        match chunk {
            Value::Object(map) => {
                let piece = map
                    .get("text")
                    .and_then(Value::as_str)
                    .or_else(|| map.get("content").and_then(Value::as_str))
                    .unwrap_or("");
                text.push_str(piece);
            }
            other => text.push_str(&stringify(other)),
        }
    }
    Ok(text)
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
