use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::resume::ResumeGenerator;
use crate::search::sessions::{SessionRegistry, MAX_SEARCH_SESSIONS};
use crate::store::SharedStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    /// Live debounced search sessions keyed by client-chosen id.
    pub search_sessions: Arc<Mutex<SessionRegistry>>,
    /// Drafts via the generative API when a key is configured, else template only.
    pub resume_generator: Arc<ResumeGenerator>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: SharedStore, resume_generator: ResumeGenerator, config: Config) -> Self {
        Self {
            store,
            search_sessions: Arc::new(Mutex::new(SessionRegistry::new(
                config.search_session_ttl,
                MAX_SEARCH_SESSIONS,
            ))),
            resume_generator: Arc::new(resume_generator),
            config,
        }
    }

    /// Seeded store, no outbound calls, zero delays.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        use std::time::Duration;

        use crate::store::HubStore;

        let config = Config {
            search_debounce: Duration::from_millis(10),
            login_delay: Duration::ZERO,
            portfolio_delay: Duration::ZERO,
            ..Config::default()
        };
        Self::new(
            HubStore::seeded().into_shared(),
            ResumeGenerator::template_only(),
            config,
        )
    }
}
