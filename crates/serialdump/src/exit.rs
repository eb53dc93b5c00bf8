use std::fmt;
use std::io;

use serialdump_dump::DumpError;
use serialdump_frame::FrameError;
use serialdump_transport::TransportError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const TRANSPORT_ERROR: i32 = 3;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const TIMEOUT: i32 = 124;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => TIMEOUT,
        io::ErrorKind::NotFound => FAILURE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn transport_error(context: &str, err: TransportError) -> CliError {
    match err {
        TransportError::Open { ref source, .. } => {
            let code = match source.kind() {
                serialport::ErrorKind::Io(io::ErrorKind::PermissionDenied) => PERMISSION_DENIED,
                serialport::ErrorKind::InvalidInput => USAGE,
                _ => TRANSPORT_ERROR,
            };
            CliError::new(code, format!("{context}: {err}"))
        }
        TransportError::InvalidConfig(_) => CliError::new(USAGE, format!("{context}: {err}")),
        TransportError::Io(source) => io_error(context, source),
        other => CliError::new(TRANSPORT_ERROR, format!("{context}: {other}")),
    }
}

pub fn frame_error(context: &str, err: FrameError) -> CliError {
    match err {
        FrameError::Io(source) => io_error(context, source),
        FrameError::Timeout { .. } => CliError::new(TIMEOUT, format!("{context}: {err}")),
        FrameError::BodyTooLarge { .. } => CliError::new(DATA_INVALID, format!("{context}: {err}")),
        FrameError::EmptyRequest => CliError::new(USAGE, format!("{context}: {err}")),
        FrameError::ConnectionClosed { .. } => CliError::new(FAILURE, format!("{context}: {err}")),
    }
}

pub fn dump_error(context: &str, err: DumpError) -> CliError {
    match err {
        DumpError::Write { source, path } => {
            io_error(&format!("{context} ({})", path.display()), source)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use serialdump_frame::Stage;

    use super::*;

    #[test]
    fn timeouts_map_to_124() {
        let err = FrameError::Timeout {
            stage: Stage::Body,
            received: 3,
            expected: 10,
        };
        let cli = frame_error("read failed", err);
        assert_eq!(cli.code, TIMEOUT);
        assert!(cli.message.contains("3 of 10"));

        let cli = io_error("x", io::Error::from(io::ErrorKind::TimedOut));
        assert_eq!(cli.code, TIMEOUT);
    }

    #[test]
    fn oversized_body_is_data_invalid() {
        let err = FrameError::BodyTooLarge { size: 99, max: 10 };
        assert_eq!(frame_error("read failed", err).code, DATA_INVALID);
    }

    #[test]
    fn closed_stream_is_failure() {
        let err = FrameError::ConnectionClosed {
            stage: Stage::Header,
            received: 0,
            expected: 4,
        };
        assert_eq!(frame_error("read failed", err).code, FAILURE);
    }

    #[test]
    fn open_failures_are_transport_errors() {
        let err = TransportError::Open {
            path: PathBuf::from("/dev/ttyNOPE"),
            source: serialport::Error::new(serialport::ErrorKind::NoDevice, "no such device"),
        };
        let cli = transport_error("open failed", err);
        assert_eq!(cli.code, TRANSPORT_ERROR);
        assert!(cli.message.contains("/dev/ttyNOPE"));
    }

    #[test]
    fn invalid_config_is_usage() {
        let err = TransportError::InvalidConfig("baud rate must be greater than zero".into());
        assert_eq!(transport_error("open failed", err).code, USAGE);
    }

    #[test]
    fn dump_write_failure_names_path() {
        let err = DumpError::Write {
            path: PathBuf::from("/ro/dump.bin"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        let cli = dump_error("save failed", err);
        assert_eq!(cli.code, PERMISSION_DENIED);
        assert!(cli.message.contains("/ro/dump.bin"));
    }
}
