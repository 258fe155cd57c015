//! linecast - line-oriented broadcast chat server.
//!
//! Clients connect over TCP, claim a unique name with `login:<name>`, and
//! every line they send afterwards is relayed to all other connections.
//! Recent chat lines are replayed to each newly logged-in client.

mod config;
mod error;
mod history;
mod network;
mod state;

use crate::config::{Config, LogFormat};
use crate::history::HistoryBuffer;
use crate::network::Gateway;
use crate::state::Hub;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config_arg = std::env::args().nth(1);
    let (config, config_path) = Config::resolve(config_arg.as_deref())?;

    init_tracing(config.logging.format);

    match &config_path {
        Some(path) => info!(path = %path, "Configuration loaded"),
        None => info!("No config file, using defaults"),
    }

    let hub = Arc::new(Hub::new(HistoryBuffer::from_config(&config.history)));

    let gateway = Gateway::bind(&config.listen, &config.limits, Arc::clone(&hub))
        .await
        .map_err(|e| {
            error!(address = %config.listen.address, error = %e, "Failed to bind listener");
            e
        })?;

    info!(
        address = %gateway.local_addr()?,
        history = hub.history_capacity(),
        max_line_len = config.limits.max_line_len,
        "Server is running"
    );

    tokio::select! {
        result = gateway.run() => result?,
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!(sessions = hub.session_count(), "Server stopped manually");
        }
    }

    Ok(())
}
