//! Outbound half of a connection, as seen by sessions.
//!
//! Sessions and broadcasters never touch sockets. They push rendered lines
//! into an [`Outbound`], and the connection task drains them to the wire.
//! The queue is unbounded: a receiver that stops reading accumulates lines
//! in memory.

use crate::error::TransportError;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Write capability of one open connection.
pub trait Outbound: Send + Sync {
    /// Queue one rendered line (terminator included) for delivery.
    fn send_line(&self, line: Arc<str>) -> Result<(), TransportError>;

    /// Close the connection once already-queued lines are written.
    fn close(&self);
}

/// Item drained by the connection writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outgoing {
    Line(Arc<str>),
    Close,
}

/// [`Outbound`] backed by the connection task's mpsc queue.
#[derive(Debug, Clone)]
pub struct ChannelOutbound {
    tx: mpsc::UnboundedSender<Outgoing>,
}

impl ChannelOutbound {
    pub fn new(tx: mpsc::UnboundedSender<Outgoing>) -> Self {
        Self { tx }
    }

    /// Create an outbound and the receiver the connection task drains.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Outgoing>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl Outbound for ChannelOutbound {
    fn send_line(&self, line: Arc<str>) -> Result<(), TransportError> {
        self.tx
            .send(Outgoing::Line(line))
            .map_err(|_| TransportError::Closed)
    }

    fn close(&self) {
        // Receiver already gone means the connection is closed anyway.
        let _ = self.tx.send(Outgoing::Close);
    }
}
