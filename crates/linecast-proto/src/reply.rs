//! Server-to-client lines.
//!
//! [`Reply`] renders the exact bytes a client sees, including the trailing
//! newline, so callers never concatenate protocol text by hand.

use std::fmt;

/// A line sent from the server to a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply<'a> {
    /// Successful login.
    Welcome {
        /// Accepted login name.
        login: &'a str,
    },
    /// Requested name belongs to another authenticated session.
    LoginTaken {
        /// Rejected login name.
        login: &'a str,
    },
    /// Pre-authentication line that was not a login attempt.
    WrongLogin,
    /// Chat message fanned out to other sessions and kept in history.
    Chat {
        /// Sender's login.
        login: &'a str,
        /// Message content with the line ending already removed.
        text: &'a str,
    },
}

impl Reply<'_> {
    /// Static label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Welcome { .. } => "welcome",
            Self::LoginTaken { .. } => "login_taken",
            Self::WrongLogin => "wrong_login",
            Self::Chat { .. } => "chat",
        }
    }
}

impl fmt::Display for Reply<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Welcome { login } => writeln!(f, "Hi, {login}!"),
            Self::LoginTaken { login } => {
                writeln!(f, "Login {login} has already taken, try another one please")
            }
            Self::WrongLogin => f.write_str("Wrong login!!!\n"),
            Self::Chat { login, text } => {
                let rendered = format!("<{login}>:  {text}\n");
                f.write_str(&rendered.replace("\n\n", "\n"))
            }
        }
    }
}
