//! # linecast-proto
//!
//! Wire protocol for a line-oriented broadcast chat server.
//!
//! Every frame on the wire is a single UTF-8 line terminated by `\n`
//! (clients may also send `\r\n`). Before authenticating, a client sends
//! `login:<name>`; afterwards every line it sends is chat content.
//!
//! ## Quick Start
//!
//! ```rust
//! use linecast_proto::{parse_login, trim_line_ending, Reply};
//!
//! let line = trim_line_ending("login:alice\r\n");
//! assert_eq!(parse_login(line), Some("alice"));
//!
//! let welcome = Reply::Welcome { login: "alice" };
//! assert_eq!(welcome.to_string(), "Hi, alice!\n");
//!
//! let chat = Reply::Chat { login: "alice", text: "hello" };
//! assert_eq!(chat.to_string(), "<alice>:  hello\n");
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod command;
pub mod error;
#[cfg(feature = "tokio")]
pub mod line;
pub mod reply;

pub use self::command::{parse_login, trim_line_ending, LOGIN_PREFIX};
pub use self::error::ProtocolError;
#[cfg(feature = "tokio")]
pub use self::line::LineCodec;
pub use self::reply::Reply;
