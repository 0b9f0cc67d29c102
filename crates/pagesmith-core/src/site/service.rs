//! Build pipeline orchestration.
//!
//! `SiteService` runs the full sequence for one build attempt: prompt ->
//! provider call -> classification -> extraction -> record install. Every
//! outcome lands as an installed record; error variants install a minimal
//! HTML error document into the same slot a success would have used, so
//! the page stays usable for retry. No automatic retry is performed.

use pagesmith_types::build::{BuildRecord, SiteBundle, SitePage};
use pagesmith_types::config::GlobalConfig;
use pagesmith_types::outcome::ModelOutcome;
use tracing::{debug, info, warn};

use crate::llm::classify::{classify, raw_text};
use crate::llm::provider::LlmProvider;
use crate::site::extract::{extract_bundle, extract_document};
use crate::site::prompt;

/// Orchestrates the builder pipeline against a provider.
pub struct SiteService<P: LlmProvider> {
    provider: P,
    config: GlobalConfig,
}

impl<P: LlmProvider> SiteService<P> {
    pub fn new(provider: P, config: GlobalConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// Run one single-document build attempt and install the result.
    ///
    /// A whitespace-only description is a no-op: the record is untouched.
    pub async fn run_page_build(&self, record: &mut BuildRecord<SitePage>, description: &str) {
        if description.trim().is_empty() {
            debug!("empty description, skipping build");
            return;
        }

        let request = prompt::page_request(description, &self.config);
        let (outcome, raw) = self.complete_and_classify(request).await;

        let page = match outcome {
            ModelOutcome::Success { text } => SitePage::new(extract_document(&text)),
            other => SitePage::new(outcome_error_page(&other)),
        };
        record.install(page, description.to_string(), raw);
    }

    /// Run one three-block build attempt and install the result.
    pub async fn run_bundle_build(&self, record: &mut BuildRecord<SiteBundle>, description: &str) {
        if description.trim().is_empty() {
            debug!("empty description, skipping build");
            return;
        }

        let request = prompt::bundle_request(description, &self.config);
        let (outcome, raw) = self.complete_and_classify(request).await;

        let bundle = match outcome {
            ModelOutcome::Success { text } => extract_bundle(&text),
            other => SiteBundle {
                html: outcome_error_page(&other),
                ..SiteBundle::default()
            },
        };
        record.install(bundle, description.to_string(), raw);
    }

    /// Call the provider, capture the literal body for the debug surface,
    /// and reduce the result to one outcome. A transport failure obtained
    /// no body, so it captures nothing.
    async fn complete_and_classify(
        &self,
        request: pagesmith_types::llm::CompletionRequest,
    ) -> (ModelOutcome, Option<String>) {
        let result = self.provider.complete(&request).await;
        let raw = result.as_ref().ok().map(raw_text);
        let outcome = classify(result);

        match &outcome {
            ModelOutcome::Success { .. } => {
                info!(provider = self.provider.name(), "build response classified as success");
            }
            other => {
                warn!(
                    provider = self.provider.name(),
                    kind = other.kind(),
                    detail = other.detail().unwrap_or(""),
                    "build response classified as failure"
                );
            }
        }
        (outcome, raw)
    }
}

/// Minimal HTML error document for a failed build, installed into the same
/// slot a successful build would have used.
pub fn outcome_error_page(outcome: &ModelOutcome) -> String {
    let detail = outcome
        .detail()
        .unwrap_or("the model returned no usable text");
    format!(
        "<html><head><title>Build failed</title></head><body>\
         <h1>Build failed: {}</h1><p>{}</p>\
         <p>Adjust your description and try again.</p>\
         </body></html>",
        escape(outcome.kind()),
        escape(detail)
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
