//! Application state wiring the pipeline services to the HTTP layer.
//!
//! There are no ambient globals: all per-user state lives in the session
//! map, keyed by the session UUID carried in the URL path. Each request
//! snapshots the record it owns, runs the pipeline on the snapshot, and
//! writes back only that record under the entry lock, so overlapping
//! requests touching different apps in one session cannot clobber each
//! other. Sessions are never evicted; the map grows for the process
//! lifetime.

use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use pagesmith_core::chat::service::ChatService;
use pagesmith_core::site::service::SiteService;
use pagesmith_infra::llm::anthropic::AnthropicProvider;
use pagesmith_infra::secret::resolve_api_key;
use pagesmith_types::build::{BuildRecord, SiteBundle, SitePage};
use pagesmith_types::chat::Conversation;
use pagesmith_types::config::GlobalConfig;

/// Concrete type aliases for the service generics pinned to the infra
/// provider.
pub type ConcreteSiteService = SiteService<AnthropicProvider>;
pub type ConcreteChatService = ChatService<AnthropicProvider>;

/// Everything one session owns: the two build records and the chat log.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub site: BuildRecord<SitePage>,
    pub studio: BuildRecord<SiteBundle>,
    pub chat: Conversation,
}

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub site_service: Arc<ConcreteSiteService>,
    pub chat_service: Arc<ConcreteChatService>,
    pub sessions: Arc<DashMap<Uuid, SessionState>>,
}

impl AppState {
    /// Initialize the application state: resolve the API key, build the
    /// provider, wire services.
    pub fn init(config: GlobalConfig) -> anyhow::Result<Self> {
        let api_key = resolve_api_key().ok_or_else(|| {
            anyhow::anyhow!("no API key found; set PAGESMITH_API_KEY or ANTHROPIC_API_KEY")
        })?;

        let mut provider = AnthropicProvider::new(api_key);
        if let Some(base_url) = &config.base_url {
            provider = provider.with_base_url(base_url.clone());
        }

        Ok(Self {
            site_service: Arc::new(SiteService::new(provider.clone(), config.clone())),
            chat_service: Arc::new(ChatService::new(provider, config)),
            sessions: Arc::new(DashMap::new()),
        })
    }

    /// Snapshot a session's state, creating a fresh one on first touch.
    ///
    /// A stale or bookmarked session id simply starts over from the
    /// initial-equivalent state.
    pub fn session(&self, id: Uuid) -> SessionState {
        self.sessions.entry(id).or_default().clone()
    }

    /// Write back the single-document build record.
    pub fn store_site(&self, id: Uuid, record: BuildRecord<SitePage>) {
        self.sessions.entry(id).or_default().site = record;
    }

    /// Write back the three-block build record.
    pub fn store_studio(&self, id: Uuid, record: BuildRecord<SiteBundle>) {
        self.sessions.entry(id).or_default().studio = record;
    }

    /// Write back the chat conversation.
    pub fn store_chat(&self, id: Uuid, conversation: Conversation) {
        self.sessions.entry(id).or_default().chat = conversation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn test_state() -> AppState {
        let provider = AnthropicProvider::new(SecretString::from("test-key-not-real"));
        AppState {
            site_service: Arc::new(SiteService::new(provider.clone(), GlobalConfig::default())),
            chat_service: Arc::new(ChatService::new(provider, GlobalConfig::default())),
            sessions: Arc::new(DashMap::new()),
        }
    }

    #[test]
    fn test_interleaved_transitions_keep_both_updates() {
        let state = test_state();
        let id = Uuid::now_v7();

        // A slow build snapshots its record first...
        let mut site = state.session(id).site;

        // ...a chat exchange completes while the build is in flight...
        let mut chat = state.session(id).chat;
        chat.push_user("hello");
        chat.push_assistant("hi");
        state.store_chat(id, chat);

        // ...and the build's write-back must not drop it.
        site.install(SitePage::new("<html></html>"), "desc".to_string(), None);
        state.store_site(id, site);

        let session = state.session(id);
        assert!(session.site.has_build());
        assert_eq!(session.chat.len(), 2);
    }

    #[test]
    fn test_unknown_session_starts_fresh() {
        let state = test_state();
        let session = state.session(Uuid::now_v7());
        assert!(!session.site.has_build());
        assert!(session.chat.is_empty());
    }
}
