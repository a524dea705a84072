//! In-memory Session Store

use crate::domain::entities::Session;
use crate::domain::repository::SessionRepository;
use crate::domain::value_objects::{ConnId, Nonce};
use crate::error::{VerifierError, VerifierResult};
use std::collections::{HashMap, VecDeque};
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard};

/// Process-local session store.
///
/// The counter and the map sit behind one mutex so that allocation and
/// recording happen as a single step. Clones share the same sessions.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    inner: Arc<Mutex<Inner>>,
    max_sessions: Option<NonZeroUsize>,
}

#[derive(Default)]
struct Inner {
    next_seq: u64,
    sessions: HashMap<ConnId, Nonce>,
    // Issue order, only maintained when a capacity limit is set
    order: VecDeque<ConnId>,
}

impl InMemorySessionStore {
    /// Unbounded store; sessions live until the process exits
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that keeps at most `max_sessions`, evicting the oldest first
    pub fn with_capacity_limit(max_sessions: NonZeroUsize) -> Self {
        Self::with_limit(Some(max_sessions))
    }

    /// Store honoring an optional limit; `None` is unbounded
    pub fn with_limit(max_sessions: Option<NonZeroUsize>) -> Self {
        Self {
            inner: Arc::default(),
            max_sessions,
        }
    }

    pub fn max_sessions(&self) -> Option<NonZeroUsize> {
        self.max_sessions
    }

    pub fn len(&self) -> VerifierResult<usize> {
        Ok(self.lock()?.sessions.len())
    }

    pub fn is_empty(&self) -> VerifierResult<bool> {
        Ok(self.len()? == 0)
    }

    fn lock(&self) -> VerifierResult<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| VerifierError::Internal("session store lock poisoned".into()))
    }
}

impl SessionRepository for InMemorySessionStore {
    async fn allocate(&self, nonce: Nonce) -> VerifierResult<Session> {
        let mut inner = self.lock()?;

        let id = ConnId::from_sequence(inner.next_seq);
        inner.next_seq += 1;
        inner.sessions.insert(id.clone(), nonce);

        if let Some(max) = self.max_sessions {
            inner.order.push_back(id.clone());
            while inner.order.len() > max.get() {
                if let Some(evicted) = inner.order.pop_front() {
                    inner.sessions.remove(&evicted);
                    tracing::debug!(conn_id = %evicted, "Evicted oldest session");
                }
            }
        }

        Ok(Session::new(id, nonce))
    }

    async fn lookup(&self, conn_id: &str) -> VerifierResult<Option<Nonce>> {
        let inner = self.lock()?;
        Ok(inner.sessions.get(conn_id).copied())
    }
}
