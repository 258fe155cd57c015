//! Client-to-server line interpretation.
//!
//! The protocol is stateful: the same text means different things before
//! and after authentication. These helpers only classify the raw text; the
//! server decides what a line means for a given session.

/// Prefix that marks a login attempt.
pub const LOGIN_PREFIX: &str = "login:";

/// Strip any trailing `\r` and `\n` characters from a received line.
#[inline]
pub fn trim_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

/// Extract the requested name from a `login:<name>` line.
///
/// Returns `None` when the line does not start with [`LOGIN_PREFIX`]. The
/// name is everything after the prefix with the line ending removed; it is
/// not otherwise validated, so `login:` yields an empty name.
pub fn parse_login(line: &str) -> Option<&str> {
    line.strip_prefix(LOGIN_PREFIX).map(trim_line_ending)
}
