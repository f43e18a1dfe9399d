//! Debounced search session: one per search box.
//!
//! Every input change replaces the pending search. The search only runs once
//! the input has been quiet for `delay`; an empty query clears results at once.
//! Dropping the session aborts any pending timer.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::search::engine::{search, SearchResults};
use crate::search::query::SearchQuery;
use crate::store::SharedStore;

pub struct SearchSession {
    store: SharedStore,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
    results: Arc<watch::Sender<SearchResults>>,
}

impl SearchSession {
    pub fn new(store: SharedStore, delay: Duration) -> Self {
        let (results, _) = watch::channel(SearchResults::empty());
        Self {
            store,
            delay,
            pending: None,
            results: Arc::new(results),
        }
    }

    /// Registers a new input, superseding whatever was pending.
    pub fn update(&mut self, query: SearchQuery) {
        self.cancel();

        if query.text.trim().is_empty() {
            self.results.send_replace(SearchResults::empty());
            return;
        }

        let store = self.store.clone();
        let delay = self.delay;
        let results = self.results.clone();

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let outcome = {
                let store = store.read().await;
                search(&store.activities, &store.students, &query)
            };
            debug!("Debounced search for {:?} matched {}", query.text, outcome.total);
            results.send_replace(outcome);
        }));
    }

    /// True while a scheduled search has not produced results yet.
    pub fn is_searching(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn latest(&self) -> SearchResults {
        self.results.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchResults> {
        self.results.subscribe()
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for SearchSession {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::HubStore;

    const DELAY: Duration = Duration::from_millis(500);

    fn session() -> SearchSession {
        SearchSession::new(HubStore::seeded().into_shared(), DELAY)
    }

    #[tokio::test(start_paused = true)]
    async fn test_results_arrive_only_after_the_delay() {
        let mut session = session();
        let mut rx = session.subscribe();

        session.update(SearchQuery::text("hackathon"));
        assert!(session.is_searching());
        assert_eq!(session.latest().total, 0);

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().total, 1);
        assert!(!session.is_searching());
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_input_supersedes_pending_search() {
        let mut session = session();
        let mut rx = session.subscribe();

        session.update(SearchQuery::text("hackathon"));
        tokio::time::sleep(Duration::from_millis(200)).await;
        session.update(SearchQuery::text("priya"));

        rx.changed().await.unwrap();
        let results = rx.borrow().clone();
        assert_eq!(results.students.len(), 1);
        assert!(results.activities.is_empty());

        // The superseded "hackathon" search never fires.
        tokio::time::sleep(DELAY * 4).await;
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_input_clears_immediately() {
        let mut session = session();
        let mut rx = session.subscribe();

        session.update(SearchQuery::text("arjun"));
        rx.changed().await.unwrap();
        assert!(rx.borrow().total > 0);

        session.update(SearchQuery::text(""));
        assert!(!session.is_searching());
        assert_eq!(session.latest(), SearchResults::empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_the_session_cancels_the_timer() {
        let mut session = session();
        let mut rx = session.subscribe();
        session.update(SearchQuery::text("hackathon"));
        drop(session);

        // Sender is gone and nothing was published.
        assert!(rx.changed().await.is_err());
        assert_eq!(rx.borrow().total, 0);
    }
}
