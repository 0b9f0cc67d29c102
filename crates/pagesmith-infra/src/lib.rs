//! Infrastructure implementations for Pagesmith.
//!
//! Concrete adapters for the ports defined in `pagesmith-core`: the HTTP
//! LLM provider, configuration loading from disk, and API-key resolution
//! from the environment.

pub mod config;
pub mod llm;
pub mod secret;
