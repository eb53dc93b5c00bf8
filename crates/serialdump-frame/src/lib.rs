//! Request/response framing for the serialdump device protocol.
//!
//! The host sends one fixed-size request and the device answers with:
//! - A 4-byte little-endian body length
//! - Exactly that many raw body bytes
//!
//! The length is the only delimiter: no magic, no checksum, no terminator.
//! Callers get the complete body or a typed error, never a partial buffer.

pub mod codec;
pub mod error;
pub mod exchange;
pub mod reader;
pub mod request;
pub mod writer;

pub use codec::{
    encode_response, FrameConfig, ResponseHeader, DEFAULT_MAX_BODY, DEFAULT_SETTLE_DELAY,
    RESPONSE_HEADER_SIZE,
};
pub use error::{FrameError, Result, Stage};
pub use exchange::exchange;
pub use reader::ResponseReader;
pub use request::{Opcode, Protocol, Request, READ_COMMAND};
pub use writer::RequestWriter;
