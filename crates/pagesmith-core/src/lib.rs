//! LLM response orchestration pipeline for Pagesmith.
//!
//! This crate defines the provider "port" (the [`llm::provider::LlmProvider`]
//! trait) and the pipeline that runs against it: prompt construction,
//! classification of the raw provider response into a closed outcome set,
//! HTML extraction, and the build/chat state transitions. It depends only
//! on `pagesmith-types` -- never on `pagesmith-infra` or any HTTP crate.

pub mod chat;
pub mod llm;
pub mod site;
