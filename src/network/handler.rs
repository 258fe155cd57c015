//! Callbacks a connection task drives on its session.

use crate::error::SessionResult;

/// Per-connection event contract.
///
/// The connection task calls [`connection_made`] once before reading,
/// [`line_received`] for each received line, and [`connection_lost`] once
/// when the stream ends for any reason.
///
/// [`connection_made`]: ConnectionHandler::connection_made
/// [`line_received`]: ConnectionHandler::line_received
/// [`connection_lost`]: ConnectionHandler::connection_lost
pub trait ConnectionHandler {
    fn connection_made(&mut self);

    /// Handle one received line. The line may still carry its terminator.
    fn line_received(&mut self, line: &str) -> SessionResult;

    fn connection_lost(&mut self);
}
