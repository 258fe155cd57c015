//! Error types for the line protocol.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Errors raised while framing lines off the wire.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A received line was not valid UTF-8.
    #[error("invalid utf-8 at byte {byte_pos}: {details}")]
    InvalidUtf8 {
        /// Raw bytes of the offending line.
        raw_line: Vec<u8>,
        /// Offset of the first invalid byte.
        byte_pos: usize,
        /// Decoder diagnostic.
        details: String,
    },

    /// A line exceeded the configured maximum length.
    #[error("line too long: {actual} bytes (limit {limit})")]
    LineTooLong {
        /// Bytes buffered when the limit was hit.
        actual: usize,
        /// Configured limit.
        limit: usize,
    },
}

impl ProtocolError {
    /// Static label for log fields.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::InvalidUtf8 { .. } => "invalid_utf8",
            Self::LineTooLong { .. } => "line_too_long",
        }
    }
}
