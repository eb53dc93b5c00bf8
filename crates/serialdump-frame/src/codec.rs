use std::time::Duration;

use bytes::{BufMut, BytesMut};

use crate::error::{FrameError, Result};

/// Response header: body length (4 bytes, little-endian).
pub const RESPONSE_HEADER_SIZE: usize = 4;

/// Default maximum body size: 16 MiB.
pub const DEFAULT_MAX_BODY: usize = 16 * 1024 * 1024;

/// Default pause between sending a request and reading the response.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(1);

/// Fixed-size prefix of every device response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseHeader {
    /// Number of body bytes that follow the header.
    pub body_len: u32,
}

impl ResponseHeader {
    /// Decode a header from the first [`RESPONSE_HEADER_SIZE`] bytes of `src`.
    ///
    /// Returns `None` if `src` is too short.
    pub fn decode(src: &[u8]) -> Option<Self> {
        let bytes: [u8; RESPONSE_HEADER_SIZE] = src.get(..RESPONSE_HEADER_SIZE)?.try_into().ok()?;
        Some(Self {
            body_len: u32::from_le_bytes(bytes),
        })
    }

    /// Append the wire bytes of this header to `dst`.
    pub fn encode(&self, dst: &mut BytesMut) {
        dst.put_u32_le(self.body_len);
    }

    /// Declared body length, checked against `max_body`.
    pub fn checked_body_len(&self, max_body: usize) -> Result<usize> {
        let size = self.body_len as usize;
        if size > max_body {
            return Err(FrameError::BodyTooLarge {
                size,
                max: max_body,
            });
        }
        Ok(size)
    }
}

/// Encode a complete device response.
///
/// Wire format:
/// ```text
/// ┌─────────────┬──────────────────┐
/// │ Length      │ Body             │
/// │ (4B LE)     │ (Length bytes)   │
/// └─────────────┴──────────────────┘
/// ```
pub fn encode_response(body: &[u8], dst: &mut BytesMut) -> Result<()> {
    let body_len = u32::try_from(body.len()).map_err(|_| FrameError::BodyTooLarge {
        size: body.len(),
        max: u32::MAX as usize,
    })?;
    dst.reserve(RESPONSE_HEADER_SIZE + body.len());
    ResponseHeader { body_len }.encode(dst);
    dst.put_slice(body);
    Ok(())
}

/// Configuration for a request/response exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameConfig {
    /// Maximum accepted body size in bytes. Default: 16 MiB.
    pub max_body_size: usize,
    /// Pause after the request is written, before the response is read.
    pub settle_delay: Duration,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_body_size: DEFAULT_MAX_BODY,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}
