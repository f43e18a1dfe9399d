//! Registry of live search sessions.
//!
//! Clients pick session ids freely, so the registry bounds itself: a session
//! idle for longer than `ttl` is dropped on the next access, and inserting
//! past `capacity` evicts the least recently used one. Dropping a session
//! aborts its pending search.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;

use crate::search::debounce::SearchSession;

pub const MAX_SEARCH_SESSIONS: usize = 1024;

struct TrackedSession {
    session: SearchSession,
    last_used: Instant,
}

pub struct SessionRegistry {
    sessions: HashMap<String, TrackedSession>,
    ttl: Duration,
    capacity: usize,
}

impl SessionRegistry {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            sessions: HashMap::new(),
            ttl,
            capacity: capacity.max(1),
        }
    }

    /// Returns the session for `id`, creating it with `make` on first use.
    pub fn get_or_insert_with(
        &mut self,
        id: String,
        make: impl FnOnce() -> SearchSession,
    ) -> &mut SearchSession {
        let now = Instant::now();
        self.prune_expired(now);
        if !self.sessions.contains_key(&id) && self.sessions.len() >= self.capacity {
            self.evict_least_recent();
        }

        let tracked = self.sessions.entry(id).or_insert_with(|| TrackedSession {
            session: make(),
            last_used: now,
        });
        tracked.last_used = now;
        &mut tracked.session
    }

    pub fn get(&mut self, id: &str) -> Option<&SearchSession> {
        let now = Instant::now();
        self.prune_expired(now);
        let tracked = self.sessions.get_mut(id)?;
        tracked.last_used = now;
        Some(&tracked.session)
    }

    pub fn remove(&mut self, id: &str) -> Option<SearchSession> {
        self.sessions.remove(id).map(|tracked| tracked.session)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    fn prune_expired(&mut self, now: Instant) {
        let before = self.sessions.len();
        let ttl = self.ttl;
        self.sessions
            .retain(|_, tracked| now.duration_since(tracked.last_used) < ttl);
        let pruned = before - self.sessions.len();
        if pruned > 0 {
            debug!("Pruned {pruned} idle search sessions");
        }
    }

    fn evict_least_recent(&mut self) {
        let oldest = self
            .sessions
            .iter()
            .min_by_key(|(_, tracked)| tracked.last_used)
            .map(|(id, _)| id.clone());
        if let Some(id) = oldest {
            self.sessions.remove(&id);
            debug!("Evicted search session {id} at capacity {}", self.capacity);
        }
    }
}
