//! Hub - the server-wide owner of sessions and history.
//!
//! One `Hub` is built at startup and shared by every connection. It owns
//! the [`Registry`] and the [`HistoryBuffer`] behind a single mutex, so each
//! login and each broadcast is one indivisible step with respect to every
//! other session. The lock is never held across an `.await`: writes only
//! enqueue onto unbounded per-connection queues.
//!
//! Broadcasts therefore have a total order, and a session that logs in sees
//! every chat line exactly once: either in its replay or as a live
//! broadcast, never both.

use crate::error::RegistryError;
use crate::history::HistoryBuffer;
use crate::network::Outbound;
use crate::state::{Registry, SessionId, SessionIdGenerator};
use linecast_proto::Reply;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

struct HubState {
    registry: Registry,
    history: HistoryBuffer,
}

/// Shared chat state: registry, history and fan-out.
pub struct Hub {
    ids: SessionIdGenerator,
    state: Mutex<HubState>,
}

impl Hub {
    pub fn new(history: HistoryBuffer) -> Self {
        Self {
            ids: SessionIdGenerator::new(),
            state: Mutex::new(HubState {
                registry: Registry::new(),
                history,
            }),
        }
    }

    /// Allocate an id for a new connection.
    pub fn next_id(&self) -> SessionId {
        self.ids.next()
    }

    /// Add a connected (not yet authenticated) session.
    pub fn register(&self, id: SessionId, outbound: Arc<dyn Outbound>) -> bool {
        self.state.lock().registry.register(id, outbound)
    }

    /// Remove a session, releasing its login. Idempotent.
    pub fn deregister(&self, id: SessionId) -> Option<String> {
        self.state.lock().registry.deregister(id)
    }

    /// Claim `login` for `id`, greet the session and replay history.
    ///
    /// Returns the number of replayed lines. On [`RegistryError::LoginTaken`]
    /// nothing is written and no state changes.
    pub fn login(&self, id: SessionId, login: &str) -> Result<usize, RegistryError> {
        let mut state = self.state.lock();
        state.registry.claim_login(id, login)?;

        let outbound = state
            .registry
            .outbound(id)
            .cloned()
            .ok_or(RegistryError::UnknownSession)?;

        let greeting: Arc<str> = Arc::from(Reply::Welcome { login }.to_string());
        let replay = state.history.snapshot();
        let replayed = replay.len();
        for line in std::iter::once(greeting).chain(replay) {
            if let Err(e) = outbound.send_line(line) {
                debug!(session = %id, error = %e, "Greeting write failed");
                break;
            }
        }
        Ok(replayed)
    }

    /// Record a rendered chat line and queue it to every session except `sender`.
    ///
    /// Receivers are all registered sessions, logged in or not. A failed
    /// write to one receiver is skipped. Returns the number of receivers
    /// the line was queued to.
    pub fn broadcast(&self, sender: SessionId, line: Arc<str>) -> usize {
        let mut state = self.state.lock();
        state.history.append(Arc::clone(&line));

        let mut delivered = 0;
        for (id, outbound) in state.registry.iter() {
            if id == sender {
                continue;
            }
            match outbound.send_line(Arc::clone(&line)) {
                Ok(()) => delivered += 1,
                Err(e) => debug!(receiver = %id, error = %e, "Broadcast write failed"),
            }
        }
        delivered
    }

    /// Number of open sessions, authenticated or not.
    pub fn session_count(&self) -> usize {
        self.state.lock().registry.len()
    }

    pub fn history_capacity(&self) -> usize {
        self.state.lock().history.capacity()
    }
}

// Read-only views for tests.
#[allow(dead_code)]
impl Hub {
    pub fn is_login_taken(&self, candidate: &str) -> bool {
        self.state.lock().registry.is_login_taken(candidate)
    }

    pub fn login_of(&self, id: SessionId) -> Option<String> {
        self.state.lock().registry.login_of(id).map(str::to_string)
    }

    pub fn is_registered(&self, id: SessionId) -> bool {
        self.state.lock().registry.is_registered(id)
    }

    pub fn history_snapshot(&self) -> Vec<Arc<str>> {
        self.state.lock().history.snapshot()
    }
}

impl Default for Hub {
    fn default() -> Self {
        Self::new(HistoryBuffer::default())
    }
}
