//! Shared domain types for Pagesmith.
//!
//! This crate holds the data shapes used across the workspace: LLM
//! request/response types, the classified model outcome, build records,
//! conversations, and configuration. It contains no business logic.

pub mod build;
pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod outcome;
