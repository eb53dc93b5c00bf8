use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Subcommand, ValueEnum};
use serialdump_frame::Protocol;
use serialdump_transport::{DEFAULT_BAUD_RATE, DEFAULT_DEVICE};

use crate::exit::{CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod hexdump;
pub mod read;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Request the device buffer, print it and save it.
    Read(ReadArgs),
    /// Print a previously saved dump file.
    Hexdump(HexdumpArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Read(args) => read::run(args, format),
        Command::Hexdump(args) => hexdump::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

/// Request encoding to use on the wire.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ProtocolArg {
    /// One-byte opcode request.
    Opcode,
    /// ASCII `READ` request.
    Ascii,
}

impl From<ProtocolArg> for Protocol {
    fn from(arg: ProtocolArg) -> Self {
        match arg {
            ProtocolArg::Opcode => Protocol::Opcode,
            ProtocolArg::Ascii => Protocol::Ascii,
        }
    }
}

#[derive(Args, Debug)]
pub struct ReadArgs {
    /// Serial device path.
    #[arg(long, short = 'd', env = "SERIALDUMP_DEVICE", default_value = DEFAULT_DEVICE)]
    pub device: PathBuf,
    /// Line speed in baud.
    #[arg(long, short = 'b', env = "SERIALDUMP_BAUD", default_value_t = DEFAULT_BAUD_RATE)]
    pub baud: u32,
    /// Request encoding understood by the firmware.
    #[arg(long, value_enum, default_value = "opcode")]
    pub protocol: ProtocolArg,
    /// Maximum wait for each read from the device (e.g. 5s, 500ms).
    #[arg(long, default_value = "5s")]
    pub timeout: String,
    /// Pause after opening the port and after sending the request (e.g. 1s, 0s).
    #[arg(long, default_value = "1s")]
    pub settle: String,
    /// Largest body length accepted from the device (bytes; K/M suffixes allowed).
    #[arg(long, default_value = "16M")]
    pub max_body: String,
    /// File the raw body is written to.
    #[arg(long, short = 'o', default_value = "dump.bin", conflicts_with = "no_save")]
    pub output: PathBuf,
    /// Do not write the raw body to disk.
    #[arg(long)]
    pub no_save: bool,
    /// Discard pending input before sending the request.
    #[arg(long)]
    pub flush: bool,
}

#[derive(Args, Debug)]
pub struct HexdumpArgs {
    /// Raw dump file to print.
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

/// Parse `500ms`, `2s` or a bare number of seconds. Zero is allowed.
pub fn parse_duration(input: &str) -> CliResult<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::new(USAGE, "duration must not be empty"));
    }

    let (number, millis) = if let Some(num) = input.strip_suffix("ms") {
        (num, true)
    } else if let Some(num) = input.strip_suffix('s') {
        (num, false)
    } else {
        (input, false)
    };

    let value: u64 = number
        .trim()
        .parse()
        .map_err(|_| CliError::new(USAGE, format!("invalid duration value: {input}")))?;

    if millis {
        Ok(Duration::from_millis(value))
    } else {
        Ok(Duration::from_secs(value))
    }
}

/// Parse a byte count with an optional `K` or `M` (binary) suffix.
pub fn parse_size(input: &str) -> CliResult<usize> {
    let input = input.trim();
    let (number, multiplier) = match input.chars().last() {
        Some('k' | 'K') => (&input[..input.len() - 1], 1024usize),
        Some('m' | 'M') => (&input[..input.len() - 1], 1024 * 1024),
        _ => (input, 1),
    };

    number
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_mul(multiplier))
        .ok_or_else(|| CliError::new(USAGE, format!("invalid size: {input}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_duration_seconds_and_millis() {
        assert_eq!(parse_duration("2s").unwrap(), Duration::from_secs(2));
        assert_eq!(parse_duration("150ms").unwrap(), Duration::from_millis(150));
        assert_eq!(parse_duration("3").unwrap(), Duration::from_secs(3));
        assert_eq!(parse_duration("0s").unwrap(), Duration::ZERO);
    }

    #[test]
    fn parse_duration_rejects_invalid_values() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("bad").is_err());
        assert!(parse_duration("-1s").is_err());
    }

    #[test]
    fn parse_size_suffixes() {
        assert_eq!(parse_size("4096").unwrap(), 4096);
        assert_eq!(parse_size("64K").unwrap(), 64 * 1024);
        assert_eq!(parse_size("16M").unwrap(), 16 * 1024 * 1024);
        assert_eq!(parse_size("0").unwrap(), 0);
    }

    #[test]
    fn parse_size_rejects_garbage() {
        let err = parse_size("lots").unwrap_err();
        assert_eq!(err.code, USAGE);
        assert!(parse_size("M").is_err());
    }
}
