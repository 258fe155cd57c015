//! Connection - Handles an individual client connection.
//!
//! Each Connection runs in its own Tokio task:
//!
//! ```text
//!    ┌──────────────────────────────────────────────────┐
//!    │                 Connection Task                  │
//!    │                                                  │
//!    │  ┌────────────────────┐   ┌──────────────────┐  │
//!    │  │ FramedRead(Lines)  │   │ FramedWrite      │  │
//!    │  └─────────┬──────────┘   └────────▲─────────┘  │
//!    │            ▼                       │            │
//!    │     tokio::select! ◄───────────────┤            │
//!    │            │                       │            │
//!    │            ▼                       │            │
//!    │       [Session] ──────▶ [Outgoing Queue] ◄── Hub broadcasts
//!    └──────────────────────────────────────────────────┘
//! ```
//!
//! Queued output is drained before more input is read, so a close request
//! always follows the lines queued ahead of it.

use crate::network::{ChannelOutbound, ConnectionHandler, Outgoing};
use crate::state::{Hub, Session};
use futures_util::{SinkExt, StreamExt};
use linecast_proto::LineCodec;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio_util::codec::{FramedRead, FramedWrite};
use tracing::{debug, info, instrument, warn};

/// A client connection handler.
pub struct Connection {
    addr: SocketAddr,
    hub: Arc<Hub>,
    stream: TcpStream,
    max_line_len: usize,
}

impl Connection {
    /// Create a new connection handler.
    pub fn new(stream: TcpStream, addr: SocketAddr, hub: Arc<Hub>, max_line_len: usize) -> Self {
        Self {
            addr,
            hub,
            stream,
            max_line_len,
        }
    }

    /// Run the connection until the peer leaves or the session closes it.
    #[instrument(skip(self), fields(addr = %self.addr), name = "connection")]
    pub async fn run(self) -> anyhow::Result<()> {
        let (read_half, write_half) = self.stream.into_split();
        let mut reader = FramedRead::new(read_half, LineCodec::with_max_len(self.max_line_len));
        let mut writer = FramedWrite::new(write_half, LineCodec::new());

        let (outbound, mut outgoing_rx) = ChannelOutbound::channel();
        let mut session = Session::new(self.hub, Arc::new(outbound));
        session.connection_made();

        loop {
            tokio::select! {
                biased;

                // BRANCH A: Outgoing lines (own replies and broadcasts from others)
                Some(out) = outgoing_rx.recv() => {
                    match out {
                        Outgoing::Line(line) => {
                            if let Err(e) = writer.send(&*line).await {
                                warn!(error = %e, "Write error");
                                break;
                            }
                        }
                        Outgoing::Close => {
                            debug!("Close requested by session");
                            break;
                        }
                    }
                }

                // BRANCH B: Network input
                result = reader.next() => {
                    match result {
                        Some(Ok(line)) => {
                            if let Err(e) = session.line_received(&line) {
                                debug!(code = e.error_code(), error = %e, "Line rejected");
                            }
                        }
                        Some(Err(e)) => {
                            warn!(code = e.error_code(), error = %e, "Read error");
                            break;
                        }
                        None => {
                            debug!("Peer closed the stream");
                            break;
                        }
                    }
                }
            }
        }

        session.connection_lost();

        // Flush whatever is still buffered and shut down the write half.
        if let Err(e) = writer.close().await {
            debug!(error = %e, "Shutdown error");
        }
        info!(session = %session.id(), "Connection closed");

        Ok(())
    }
}
