//! Test doubles shared by the state unit tests.

use crate::error::TransportError;
use crate::network::Outbound;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// [`Outbound`] that records every line instead of writing to a socket.
#[derive(Default)]
pub struct RecordingOutbound {
    lines: Mutex<Vec<String>>,
    closed: AtomicBool,
    failing: AtomicBool,
}

impl RecordingOutbound {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Everything received so far, without clearing it.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Drain received lines.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Make every subsequent write fail as if the peer had vanished.
    pub fn fail_writes(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }
}

impl Outbound for RecordingOutbound {
    fn send_line(&self, line: Arc<str>) -> Result<(), TransportError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(TransportError::Closed);
        }
        self.lines.lock().push(line.to_string());
        Ok(())
    }

    fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}
