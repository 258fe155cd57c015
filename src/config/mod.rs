//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Top-level config struct and loading (Config, ConfigError)
//! - [`listen`]: Network listener configuration (ListenConfig)
//! - [`history`]: Replay buffer configuration (HistoryConfig)
//! - [`limits`]: Input limits configuration (LimitsConfig)
//! - [`logging`]: Log output configuration (LoggingConfig, LogFormat)
//! - [`validation`]: Startup sanity checks (ValidationError)

mod history;
mod limits;
mod listen;
mod logging;
mod types;
mod validation;

pub use history::HistoryConfig;
pub use limits::LimitsConfig;
pub use listen::ListenConfig;
pub use logging::LogFormat;
pub use types::Config;
