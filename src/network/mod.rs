//! Network module.
//!
//! Contains the Gateway (TCP listener), the per-connection task, and the
//! transport-facing traits sessions are written against.

mod connection;
mod gateway;
mod handler;
mod outbound;

pub use connection::Connection;
pub use gateway::Gateway;
pub use handler::ConnectionHandler;
pub use outbound::{ChannelOutbound, Outbound, Outgoing};
