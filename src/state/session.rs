//! Per-connection session state machine.
//!
//! ```text
//! ┌─────────────────┐   login:<free name>   ┌───────────────┐
//! │ Unauthenticated ├──────────────────────►│ Authenticated │
//! └──┬──────────┬───┘                       └───────┬───────┘
//!    │ ▲ other  │ login:<taken name>                │
//!    └─┘ line   │         connection lost           │
//!               ▼    ◄──────────────────────────────┘
//!         ┌────────────┐
//!         │ Terminated │
//!         └────────────┘
//! ```
//!
//! A session is registered with the [`Hub`] from `connection_made` until it
//! terminates. Errors stay local: nothing a session does on bad input
//! touches another session's state.

use crate::error::{RegistryError, SessionError, SessionResult};
use crate::network::{ConnectionHandler, Outbound};
use crate::state::{Hub, SessionId};
use linecast_proto::{Reply, parse_login, trim_line_ending};
use std::sync::Arc;
use tracing::{debug, info};

/// Lifecycle position of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated,
    Terminated,
}

/// One client's view of the chat.
pub struct Session {
    id: SessionId,
    hub: Arc<Hub>,
    outbound: Arc<dyn Outbound>,
    login: Option<String>,
    state: SessionState,
}

impl Session {
    pub fn new(hub: Arc<Hub>, outbound: Arc<dyn Outbound>) -> Self {
        Self {
            id: hub.next_id(),
            hub,
            outbound,
            login: None,
            state: SessionState::Unauthenticated,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    #[allow(dead_code)] // Used by tests
    pub fn login(&self) -> Option<&str> {
        self.login.as_deref()
    }

    #[allow(dead_code)] // Used by tests
    pub fn state(&self) -> SessionState {
        self.state
    }

    fn reply(&self, reply: Reply<'_>) -> SessionResult {
        self.outbound.send_line(Arc::from(reply.to_string()))?;
        Ok(())
    }

    fn handle_login(&mut self, line: &str) -> SessionResult {
        let Some(name) = parse_login(line) else {
            debug!(session = %self.id, "Wrong login attempt");
            self.reply(Reply::WrongLogin)?;
            return Err(SessionError::WrongLogin);
        };

        match self.hub.login(self.id, name) {
            Ok(replayed) => {
                self.login = Some(name.to_string());
                self.state = SessionState::Authenticated;
                info!(session = %self.id, login = %name, replayed, "Login accepted");
                Ok(())
            }
            Err(RegistryError::LoginTaken) => {
                info!(session = %self.id, login = %name, "Login rejected - name in use");
                let sent = self.reply(Reply::LoginTaken { login: name });
                self.terminate();
                sent?;
                Err(SessionError::LoginTaken(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn handle_chat(&self, login: &str, line: &str) {
        let rendered: Arc<str> = Arc::from(Reply::Chat { login, text: line }.to_string());
        let delivered = self.hub.broadcast(self.id, rendered);
        debug!(session = %self.id, %login, delivered, "Chat message broadcast");
    }

    /// Leave the registry and ask the transport to hang up.
    fn terminate(&mut self) {
        self.state = SessionState::Terminated;
        self.hub.deregister(self.id);
        self.outbound.close();
    }
}

impl ConnectionHandler for Session {
    fn connection_made(&mut self) {
        self.hub.register(self.id, Arc::clone(&self.outbound));
        info!(session = %self.id, "New user has just connected");
    }

    fn line_received(&mut self, line: &str) -> SessionResult {
        let line = trim_line_ending(line);
        match self.state {
            SessionState::Unauthenticated => self.handle_login(line),
            SessionState::Authenticated => {
                if let Some(login) = self.login.as_deref() {
                    self.handle_chat(login, line);
                }
                Ok(())
            }
            // Lines that raced the close are dropped.
            SessionState::Terminated => Ok(()),
        }
    }

    fn connection_lost(&mut self) {
        self.state = SessionState::Terminated;
        self.hub.deregister(self.id);
        match &self.login {
            Some(login) => info!(session = %self.id, %login, "Logged off"),
            None => info!(session = %self.id, "Unidentified user disconnected"),
        }
    }
}
