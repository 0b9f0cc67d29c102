//! The chat pipeline.

pub mod service;
