use std::fmt;

/// Which part of the response was being read when an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Header,
    Body,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Header => f.write_str("header"),
            Stage::Body => f.write_str("body"),
        }
    }
}

/// Errors that can occur while exchanging frames with the device.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The declared body length exceeds the configured maximum.
    #[error("body too large ({size} bytes, max {max})")]
    BodyTooLarge { size: usize, max: usize },

    /// A literal request command carried no bytes.
    #[error("request command must not be empty")]
    EmptyRequest,

    /// The device stopped sending before the expected byte count arrived.
    #[error("timed out reading response {stage} ({received} of {expected} bytes)")]
    Timeout {
        stage: Stage,
        received: usize,
        expected: usize,
    },

    /// The stream reached EOF before the expected byte count arrived.
    #[error("connection closed reading response {stage} ({received} of {expected} bytes)")]
    ConnectionClosed {
        stage: Stage,
        received: usize,
        expected: usize,
    },

    /// An I/O error occurred while reading or writing frames.
    #[error("frame I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FrameError {
    /// True when retrying the exchange may succeed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FrameError::Timeout { .. })
    }
}

pub type Result<T> = std::result::Result<T, FrameError>;
