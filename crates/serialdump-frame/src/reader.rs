use std::io::{ErrorKind, Read};

use bytes::{Bytes, BytesMut};

use crate::codec::{FrameConfig, ResponseHeader, RESPONSE_HEADER_SIZE};
use crate::error::{FrameError, Result, Stage};

const INITIAL_BUFFER_CAPACITY: usize = 8 * 1024;
const READ_CHUNK_SIZE: usize = 8 * 1024;

/// Reads length-prefixed device responses from any `Read` stream.
///
/// Handles partial reads internally and never reads past the end of the
/// declared body. A `Timeout` leaves the bytes received so far buffered, so
/// calling the same method again resumes where the previous call stopped.
pub struct ResponseReader<T> {
    inner: T,
    buf: BytesMut,
    config: FrameConfig,
    pending: Option<ResponseHeader>,
}

impl<T: Read> ResponseReader<T> {
    /// Create a new response reader with default configuration.
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, FrameConfig::default())
    }

    /// Create a new response reader with explicit configuration.
    pub fn with_config(inner: T, config: FrameConfig) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            config,
            pending: None,
        }
    }

    /// Read the response header (blocking).
    pub fn read_header(&mut self) -> Result<ResponseHeader> {
        if let Some(header) = self.pending {
            return Ok(header);
        }

        self.fill_to(RESPONSE_HEADER_SIZE, Stage::Header)?;
        let header = ResponseHeader::decode(&self.buf).ok_or(FrameError::ConnectionClosed {
            stage: Stage::Header,
            received: self.buf.len(),
            expected: RESPONSE_HEADER_SIZE,
        })?;
        self.buf.clear();
        self.pending = Some(header);

        tracing::info!(body_len = header.body_len, "response header received");
        Ok(header)
    }

    /// Read the body announced by `header` (blocking).
    ///
    /// Fails with `BodyTooLarge` before reading anything if the declared
    /// length exceeds the configured maximum.
    pub fn read_body(&mut self, header: ResponseHeader) -> Result<Bytes> {
        let len = match header.checked_body_len(self.config.max_body_size) {
            Ok(len) => len,
            Err(err) => {
                tracing::warn!(
                    body_len = header.body_len,
                    max = self.config.max_body_size,
                    "rejecting oversized response body"
                );
                self.pending = None;
                return Err(err);
            }
        };

        self.buf.reserve(len.saturating_sub(self.buf.len()));
        self.fill_to(len, Stage::Body)?;
        self.pending = None;
        Ok(self.buf.split_to(len).freeze())
    }

    /// Read a complete response and return its body (blocking).
    pub fn read_response(&mut self) -> Result<Bytes> {
        let header = self.read_header()?;
        self.read_body(header)
    }

    fn fill_to(&mut self, target: usize, stage: Stage) -> Result<()> {
        let mut chunk = [0u8; READ_CHUNK_SIZE];
        while self.buf.len() < target {
            let want = (target - self.buf.len()).min(READ_CHUNK_SIZE);
            let read = match self.inner.read(&mut chunk[..want]) {
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if matches!(err.kind(), ErrorKind::TimedOut | ErrorKind::WouldBlock) => {
                    return Err(FrameError::Timeout {
                        stage,
                        received: self.buf.len(),
                        expected: target,
                    });
                }
                Err(err) => return Err(FrameError::Io(err)),
            };

            if read == 0 {
                return Err(FrameError::ConnectionClosed {
                    stage,
                    received: self.buf.len(),
                    expected: target,
                });
            }

            self.buf.extend_from_slice(&chunk[..read]);
            tracing::trace!(%stage, received = self.buf.len(), expected = target, "chunk");
        }
        Ok(())
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Update maximum body size for subsequent responses.
    pub fn set_max_body_size(&mut self, max_body_size: usize) {
        self.config.max_body_size = max_body_size;
    }

    /// Current reader configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }
}
