//! Active session registry.
//!
//! Tracks every open, non-terminated connection in connection order and
//! indexes authenticated sessions by login. A login is held by at most one
//! session at a time and never changes once assigned.

use crate::error::RegistryError;
use crate::network::Outbound;
use crate::state::SessionId;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

struct Entry {
    outbound: Arc<dyn Outbound>,
    login: Option<String>,
}

/// Registered sessions plus the login-uniqueness index.
#[derive(Default)]
pub struct Registry {
    /// Keyed by id; ids are issued in connection order.
    sessions: BTreeMap<SessionId, Entry>,
    logins: HashMap<String, SessionId>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a freshly connected session. Returns `false` if `id` is already present.
    pub fn register(&mut self, id: SessionId, outbound: Arc<dyn Outbound>) -> bool {
        if self.sessions.contains_key(&id) {
            return false;
        }
        self.sessions.insert(
            id,
            Entry {
                outbound,
                login: None,
            },
        );
        true
    }

    /// Remove a session and release its login. Idempotent.
    ///
    /// Returns the released login, if the session had one.
    pub fn deregister(&mut self, id: SessionId) -> Option<String> {
        let entry = self.sessions.remove(&id)?;
        let login = entry.login?;
        self.logins.remove(&login);
        Some(login)
    }

    pub fn is_registered(&self, id: SessionId) -> bool {
        self.sessions.contains_key(&id)
    }

    /// Whether an authenticated session currently holds `candidate`.
    pub fn is_login_taken(&self, candidate: &str) -> bool {
        self.logins.contains_key(candidate)
    }

    /// Check `login` and assign it to `id` in one step.
    pub fn claim_login(&mut self, id: SessionId, login: &str) -> Result<(), RegistryError> {
        if self.is_login_taken(login) {
            return Err(RegistryError::LoginTaken);
        }
        let entry = self
            .sessions
            .get_mut(&id)
            .ok_or(RegistryError::UnknownSession)?;
        if entry.login.is_some() {
            return Err(RegistryError::AlreadyAuthenticated);
        }
        entry.login = Some(login.to_string());
        self.logins.insert(login.to_string(), id);
        Ok(())
    }

    pub fn login_of(&self, id: SessionId) -> Option<&str> {
        self.sessions.get(&id)?.login.as_deref()
    }

    pub fn outbound(&self, id: SessionId) -> Option<&Arc<dyn Outbound>> {
        self.sessions.get(&id).map(|entry| &entry.outbound)
    }

    /// Registered sessions in connection order, authenticated or not.
    pub fn iter(&self) -> impl Iterator<Item = (SessionId, &Arc<dyn Outbound>)> {
        self.sessions.iter().map(|(id, entry)| (*id, &entry.outbound))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[allow(dead_code)] // Used by tests
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    #[allow(dead_code)] // Used by tests
    pub fn authenticated_count(&self) -> usize {
        self.logins.len()
    }
}
