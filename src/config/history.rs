//! Replay buffer configuration.

use serde::Deserialize;

/// Number of chat lines kept for replay when nothing is configured.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Replay buffer configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of chat lines replayed to a newly logged-in client.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

fn default_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}
