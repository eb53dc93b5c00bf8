use std::io::{Read, Write};
use std::time::Duration;

use serialport::{ClearBuffer, DataBits, FlowControl, Parity, SerialPort, StopBits};

use crate::config::SerialConfig;
use crate::error::{Result, TransportError};

/// An open serial device that implements Read + Write.
///
/// Reads block for at most the configured timeout and then fail with
/// `ErrorKind::TimedOut`. The device is closed on drop.
pub struct SerialStream {
    inner: Box<dyn SerialPort>,
}

impl SerialStream {
    /// Open the device described by `config` (8N1, no flow control).
    pub fn open(config: &SerialConfig) -> Result<Self> {
        config.validate()?;

        let inner = serialport::new(config.path.to_string_lossy(), config.baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(config.read_timeout)
            .open()
            .map_err(|source| TransportError::Open {
                path: config.path.clone(),
                source,
            })?;

        tracing::debug!(
            device = %config.path.display(),
            baud = config.baud_rate,
            timeout_ms = config.read_timeout.as_millis() as u64,
            "serial device opened"
        );

        Ok(Self { inner })
    }

    /// Wrap an already opened port.
    pub fn from_port(inner: Box<dyn SerialPort>) -> Self {
        Self { inner }
    }

    /// Set the per-read timeout.
    pub fn set_read_timeout(&mut self, timeout: Duration) -> Result<()> {
        if timeout.is_zero() {
            return Err(TransportError::InvalidConfig(
                "read timeout must be greater than zero".to_string(),
            ));
        }
        self.inner.set_timeout(timeout).map_err(Into::into)
    }

    /// Current per-read timeout.
    pub fn read_timeout(&self) -> Duration {
        self.inner.timeout()
    }

    /// Discard bytes the device sent before the request went out.
    pub fn clear_input(&mut self) -> Result<()> {
        let pending = self.inner.bytes_to_read().unwrap_or(0);
        self.inner.clear(ClearBuffer::Input)?;
        if pending > 0 {
            tracing::debug!(discarded = pending, "cleared stale input");
        }
        Ok(())
    }

    /// Device name as reported by the OS, if any.
    pub fn name(&self) -> Option<String> {
        self.inner.name()
    }
}

impl Read for SerialStream {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Write for SerialStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

impl std::fmt::Debug for SerialStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerialStream")
            .field("name", &self.inner.name())
            .field("timeout", &self.inner.timeout())
            .finish()
    }
}
