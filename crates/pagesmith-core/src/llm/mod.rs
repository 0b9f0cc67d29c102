//! Provider abstraction and response classification.

pub mod classify;
pub mod provider;
