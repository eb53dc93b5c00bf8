use std::fmt;

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{FrameError, Result};

/// ASCII command understood by the literal-command firmware.
pub const READ_COMMAND: &[u8] = b"READ";

/// Operation codes of the enumerated-opcode firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    /// Dump the whole device buffer.
    ReadAll = 0,
    /// Write to the device buffer.
    Write = 1,
}

impl Opcode {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Opcode::ReadAll),
            1 => Ok(Opcode::Write),
            other => Err(other),
        }
    }
}

/// Request encoding spoken by the device firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    /// One opcode byte.
    #[default]
    Opcode,
    /// The ASCII literal `READ`.
    Ascii,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Opcode => f.write_str("opcode"),
            Protocol::Ascii => f.write_str("ascii"),
        }
    }
}

/// A single request sent to the device.
///
/// Wire format:
/// ```text
/// Opcode:   ┌───────────┐
///           │ Op (1B)   │
///           └───────────┘
/// Literal:  ┌──────────────────────┐
///           │ ASCII bytes (no NUL) │
///           └──────────────────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Opcode(Opcode),
    Literal(Bytes),
}

impl Request {
    /// The read-everything request for `protocol`.
    pub fn read_all(protocol: Protocol) -> Self {
        match protocol {
            Protocol::Opcode => Request::Opcode(Opcode::ReadAll),
            Protocol::Ascii => Request::Literal(Bytes::from_static(READ_COMMAND)),
        }
    }

    /// Number of bytes this request occupies on the wire.
    pub fn wire_size(&self) -> usize {
        match self {
            Request::Opcode(_) => 1,
            Request::Literal(command) => command.len(),
        }
    }

    /// Append the wire bytes of this request to `dst`.
    pub fn encode(&self, dst: &mut BytesMut) -> Result<()> {
        match self {
            Request::Opcode(op) => dst.put_u8(op.as_u8()),
            Request::Literal(command) => {
                if command.is_empty() {
                    return Err(FrameError::EmptyRequest);
                }
                dst.put_slice(command);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opcode_request_is_one_byte() {
        let mut buf = BytesMut::new();
        Request::read_all(Protocol::Opcode).encode(&mut buf).unwrap();
        assert_eq!(buf.as_ref(), &[0x00]);

        buf.clear();
        Request::Opcode(Opcode::Write).encode(&mut buf).unwrap();
        assert_eq!(buf.as_ref(), &[0x01]);
    }

    #[test]
    fn ascii_request_is_literal_without_terminator() {
        let mut buf = BytesMut::new();
        let request = Request::read_all(Protocol::Ascii);
        request.encode(&mut buf).unwrap();
        assert_eq!(buf.as_ref(), b"READ");
        assert_eq!(request.wire_size(), 4);
    }

    #[test]
    fn empty_literal_is_rejected() {
        let mut buf = BytesMut::new();
        let err = Request::Literal(Bytes::new()).encode(&mut buf).unwrap_err();
        assert!(matches!(err, FrameError::EmptyRequest));
        assert!(buf.is_empty());
    }

    #[test]
    fn opcode_from_u8() {
        assert_eq!(Opcode::try_from(0), Ok(Opcode::ReadAll));
        assert_eq!(Opcode::try_from(1), Ok(Opcode::Write));
        assert_eq!(Opcode::try_from(7), Err(7));
    }
}
