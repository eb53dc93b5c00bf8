use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, TransportError};

/// Device path used when none is configured.
pub const DEFAULT_DEVICE: &str = "/dev/ttyACM0";

/// Line speed used when none is configured.
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// Per-read timeout used when none is configured.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Line settings for opening a serial device.
///
/// Framing is always 8N1 without flow control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialConfig {
    /// Device path, e.g. `/dev/ttyACM0` or `COM3`.
    pub path: PathBuf,
    /// Line speed in baud.
    pub baud_rate: u32,
    /// Maximum time a single read may wait for data.
    pub read_timeout: Duration,
}

impl SerialConfig {
    /// Configuration for `path` with default line settings.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Reject settings the device layer would misinterpret.
    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(TransportError::InvalidConfig(
                "device path must not be empty".to_string(),
            ));
        }
        if self.baud_rate == 0 {
            return Err(TransportError::InvalidConfig(
                "baud rate must be greater than zero".to_string(),
            ));
        }
        if self.read_timeout.is_zero() {
            return Err(TransportError::InvalidConfig(
                "read timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DEVICE),
            baud_rate: DEFAULT_BAUD_RATE,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }
}
