//! Network listener configuration.

use serde::Deserialize;
use std::net::{Ipv4Addr, SocketAddr};

/// Default chat port.
pub const DEFAULT_PORT: u16 = 9999;

/// Network listener configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ListenConfig {
    /// Address to bind to (e.g., "127.0.0.1:9999").
    #[serde(default = "default_address")]
    pub address: SocketAddr,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
        }
    }
}

fn default_address() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT))
}
