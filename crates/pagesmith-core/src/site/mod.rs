//! The website builder pipeline: prompt templates, delimiter extraction,
//! and the build service that ties them to a provider.

pub mod extract;
pub mod prompt;
pub mod service;
