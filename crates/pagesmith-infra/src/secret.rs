//! API-key resolution from environment variables.
//!
//! Checks `PAGESMITH_API_KEY` first, then `ANTHROPIC_API_KEY`. The value
//! is wrapped in [`SecretString`] immediately so it never appears in
//! Debug output downstream. Env vars with invalid Unicode are treated as
//! not found rather than erroring, since keys must be valid strings.

use secrecy::SecretString;

/// Env var names checked in priority order.
const API_KEY_VARS: [&str; 2] = ["PAGESMITH_API_KEY", "ANTHROPIC_API_KEY"];

/// Resolve the provider API key from the environment, if present.
pub fn resolve_api_key() -> Option<SecretString> {
    for name in API_KEY_VARS {
        if let Ok(value) = std::env::var(name) {
            if !value.trim().is_empty() {
                return Some(SecretString::from(value));
            }
        }
    }
    None
}
