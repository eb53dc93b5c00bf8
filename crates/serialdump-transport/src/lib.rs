//! Serial port transport for serialdump.
//!
//! Wraps a host serial device (CDC-ACM, USB-UART bridge) as a plain
//! `Read + Write` stream with an explicit read timeout, so the framing layer
//! above never blocks forever on a silent device.

pub mod config;
pub mod error;
pub mod stream;

pub use config::{SerialConfig, DEFAULT_BAUD_RATE, DEFAULT_DEVICE, DEFAULT_READ_TIMEOUT};
pub use error::{Result, TransportError};
pub use stream::SerialStream;
