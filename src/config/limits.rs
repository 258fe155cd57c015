//! Input limits configuration.

use linecast_proto::line::DEFAULT_MAX_LINE_LEN;
use serde::Deserialize;

/// Input limits configuration.
///
/// A client that sends a line longer than `max_line_len` is disconnected.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Maximum bytes per received line, terminator included (default: 4096).
    #[serde(default = "default_max_line_len")]
    pub max_line_len: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_line_len: default_max_line_len(),
        }
    }
}

fn default_max_line_len() -> usize {
    DEFAULT_MAX_LINE_LEN
}
