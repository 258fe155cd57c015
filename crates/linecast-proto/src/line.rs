//! Line-based codec for tokio.
//!
//! Reads newline-terminated UTF-8 lines and writes pre-rendered text
//! verbatim. Received lines keep their terminator; use
//! [`trim_line_ending`](crate::trim_line_ending) to strip it.

use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};

use crate::error::{ProtocolError, Result};

/// Default maximum length of a received line, terminator included.
pub const DEFAULT_MAX_LINE_LEN: usize = 4096;

/// Line-based codec that handles newline-terminated messages.
#[derive(Debug, Clone)]
pub struct LineCodec {
    /// Index of next byte to check for newline
    next_index: usize,
    /// Maximum line length
    max_len: usize,
}

impl LineCodec {
    /// Create a codec with the default line limit.
    pub fn new() -> Self {
        Self::with_max_len(DEFAULT_MAX_LINE_LEN)
    }

    /// Create a codec with a custom line limit.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            next_index: 0,
            max_len,
        }
    }

    /// Configured line limit.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    fn decode_line(line: BytesMut) -> Result<String> {
        String::from_utf8(line.to_vec()).map_err(|e| ProtocolError::InvalidUtf8 {
            byte_pos: e.utf8_error().valid_up_to(),
            details: e.utf8_error().to_string(),
            raw_line: e.into_bytes(),
        })
    }
}

impl Default for LineCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for LineCodec {
    type Item = String;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<String>> {
        if let Some(offset) = src[self.next_index..].iter().position(|b| *b == b'\n') {
            let line = src.split_to(self.next_index + offset + 1);
            self.next_index = 0;

            if line.len() > self.max_len {
                return Err(ProtocolError::LineTooLong {
                    actual: line.len(),
                    limit: self.max_len,
                });
            }

            Self::decode_line(line).map(Some)
        } else {
            // No complete line yet - remember where we stopped
            self.next_index = src.len();

            if src.len() > self.max_len {
                return Err(ProtocolError::LineTooLong {
                    actual: src.len(),
                    limit: self.max_len,
                });
            }

            Ok(None)
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<String>> {
        if let Some(line) = self.decode(src)? {
            return Ok(Some(line));
        }
        if src.is_empty() {
            return Ok(None);
        }
        // Peer closed without a final newline; hand over what it sent.
        self.next_index = 0;
        let rest = src.split_to(src.len());
        Self::decode_line(rest).map(Some)
    }
}

impl Encoder<&str> for LineCodec {
    type Error = ProtocolError;

    fn encode(&mut self, msg: &str, dst: &mut BytesMut) -> Result<()> {
        dst.extend_from_slice(msg.as_bytes());
        Ok(())
    }
}
