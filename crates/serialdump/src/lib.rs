//! Request a data block from an embedded device over serial and dump it.
//!
//! # Crate Structure
//!
//! - [`transport`] — Serial device access with read timeouts
//! - [`frame`] — Request encoding and length-prefixed response reading
//! - [`dump`] — Hex dump formatting and raw capture files

/// Re-export transport types.
pub mod transport {
    pub use serialdump_transport::*;
}

/// Re-export frame types.
pub mod frame {
    pub use serialdump_frame::*;
}

/// Re-export dump types.
pub mod dump {
    pub use serialdump_dump::*;
}
