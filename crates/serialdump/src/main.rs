mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "serialdump",
    version,
    about = "Request a data block from a serial device and dump it"
)]
struct Cli {
    /// Output format (stdout).
    #[arg(long, value_name = "FORMAT", default_value = "hex", global = true)]
    format: OutputFormat,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr). Overridden by SERIALDUMP_LOG.
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    match cmd::run(cli.command, cli.format) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::cmd::ProtocolArg;

    #[test]
    fn parses_read_with_defaults() {
        let cli = Cli::try_parse_from(["serialdump", "read"]).expect("read args should parse");
        assert_eq!(cli.format, OutputFormat::Hex);
        match cli.command {
            Command::Read(args) => {
                assert_eq!(args.protocol, ProtocolArg::Opcode);
                assert_eq!(args.output, PathBuf::from("dump.bin"));
                assert!(!args.no_save);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_read_options() {
        let cli = Cli::try_parse_from([
            "serialdump",
            "--format",
            "json",
            "read",
            "--device",
            "/dev/ttyUSB0",
            "--baud",
            "921600",
            "--protocol",
            "ascii",
            "--timeout",
            "500ms",
        ])
        .expect("read args should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Command::Read(args) => {
                assert_eq!(args.device, PathBuf::from("/dev/ttyUSB0"));
                assert_eq!(args.baud, 921_600);
                assert_eq!(args.protocol, ProtocolArg::Ascii);
                assert_eq!(args.timeout, "500ms");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_output_with_no_save() {
        let err = Cli::try_parse_from(["serialdump", "read", "--output", "x.bin", "--no-save"])
            .expect_err("conflicting args should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn parses_hexdump_subcommand() {
        let cli = Cli::try_parse_from(["serialdump", "hexdump", "dump.bin", "--format", "table"])
            .expect("hexdump args should parse");
        assert_eq!(cli.format, OutputFormat::Table);
        assert!(matches!(cli.command, Command::Hexdump(_)));
    }
}
