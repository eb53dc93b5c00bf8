//! Hex dump formatting and raw capture files.
//!
//! - [`hex`] renders a buffer as tab-separated rows of 16 octets
//! - [`file`] writes the untouched buffer to disk

pub mod error;
pub mod file;
pub mod hex;

pub use error::{DumpError, Result};
pub use file::write_raw;
pub use hex::{header_row, hex_dump, rows, write_hex_dump, HexRow, BYTES_PER_ROW};
