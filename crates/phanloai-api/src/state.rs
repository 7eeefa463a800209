use chrono::Duration;
use std::sync::Arc;

use phanloai_chat::ChatEngine;
use phanloai_classify::Classifier;
use phanloai_persist::{ConversationStore, CredentialStore, SessionStore};

use crate::auth::AuthService;
use crate::config::Config;

/// Shared application state passed to all handlers.
///
/// Every dependency is an injected trait object; nothing reaches into
/// ambient globals.
pub struct AppState {
    pub config: Arc<Config>,
    pub engine: ChatEngine,
    pub conversations: Arc<dyn ConversationStore>,
    pub auth: AuthService,
}

impl AppState {
    pub fn new(
        config: Config,
        credentials: Arc<dyn CredentialStore>,
        sessions: Arc<dyn SessionStore>,
        conversations: Arc<dyn ConversationStore>,
        classifier: Arc<dyn Classifier>,
    ) -> Self {
        let session_ttl = Duration::hours(config.session.ttl_hours);

        Self {
            config: Arc::new(config),
            engine: ChatEngine::new(conversations.clone(), classifier),
            conversations,
            auth: AuthService::new(credentials, sessions, session_ttl),
        }
    }
}
