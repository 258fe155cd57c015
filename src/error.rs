//! Unified error handling for linecast.
//!
//! Every error here is scoped to the session that produced it. Nothing in
//! this module is ever reported to a peer session.

use thiserror::Error;

// ============================================================================
// Session Errors (line handling)
// ============================================================================

/// Errors that can occur while a session handles a received line.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Pre-login line without the `login:` prefix. The client may retry.
    #[error("expected login:<name>")]
    WrongLogin,

    /// Requested name is held by another authenticated session.
    #[error("login {0} is already taken")]
    LoginTaken(String),

    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

impl SessionError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::WrongLogin => "wrong_login",
            Self::LoginTaken(_) => "login_taken",
            Self::Registry(_) => "registry",
            Self::Transport(_) => "transport",
        }
    }

    /// Whether the session cannot continue after this error.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::WrongLogin)
    }
}

/// Result type for line handlers.
pub type SessionResult = Result<(), SessionError>;

// ============================================================================
// Registry Errors
// ============================================================================

/// Registry operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("login already taken")]
    LoginTaken,

    #[error("session is not registered")]
    UnknownSession,

    #[error("session already has a login")]
    AlreadyAuthenticated,
}

// ============================================================================
// Transport Errors
// ============================================================================

/// Failure to hand bytes to a connection's writer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The connection task is gone; nothing more can be written.
    #[error("connection closed")]
    Closed,
}
