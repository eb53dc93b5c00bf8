use std::io::{Read, Write};

use bytes::Bytes;
use serialdump_dump::write_raw;
use serialdump_frame::{exchange, FrameConfig, Protocol, Request};
use serialdump_transport::{SerialConfig, SerialStream};

use crate::cmd::{parse_duration, parse_size, ReadArgs};
use crate::exit::{dump_error, frame_error, transport_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_dump, DumpSummary, OutputFormat};

/// Everything one device read needs, resolved from the command line.
#[derive(Debug)]
struct ReadPlan {
    serial: SerialConfig,
    frame: FrameConfig,
    request: Request,
}

impl ReadPlan {
    fn from_args(args: &ReadArgs) -> CliResult<Self> {
        let read_timeout = parse_duration(&args.timeout)?;
        if read_timeout.is_zero() {
            return Err(CliError::new(USAGE, "--timeout must be greater than zero"));
        }

        Ok(Self {
            serial: SerialConfig {
                path: args.device.clone(),
                baud_rate: args.baud,
                read_timeout,
            },
            frame: FrameConfig {
                max_body_size: parse_size(&args.max_body)?,
                settle_delay: parse_duration(&args.settle)?,
            },
            request: Request::read_all(args.protocol.into()),
        })
    }
}

pub fn run(args: ReadArgs, format: OutputFormat) -> CliResult<i32> {
    let plan = ReadPlan::from_args(&args)?;

    let mut stream =
        SerialStream::open(&plan.serial).map_err(|err| transport_error("open failed", err))?;

    // Opening a CDC-ACM port can reset the device.
    if !plan.frame.settle_delay.is_zero() {
        std::thread::sleep(plan.frame.settle_delay);
    }

    if args.flush {
        stream
            .clear_input()
            .map_err(|err| transport_error("flush failed", err))?;
    }

    tracing::info!(
        device = %plan.serial.path.display(),
        protocol = %Protocol::from(args.protocol),
        "requesting device buffer"
    );
    let body = capture(&mut stream, &plan)?;
    drop(stream);

    let saved_to = save_body(&body, &args)?;
    let device = plan.serial.path.display().to_string();
    let summary = DumpSummary {
        source: "device",
        name: &device,
        saved_to: saved_to.as_deref(),
    };
    print_dump(&summary, &body, format)?;

    Ok(SUCCESS)
}

fn capture<S: Read + Write>(stream: S, plan: &ReadPlan) -> CliResult<Bytes> {
    let body = exchange(stream, &plan.request, &plan.frame)
        .map_err(|err| frame_error("read failed", err))?;
    tracing::info!(bytes = body.len(), "response body received");
    Ok(body)
}

fn save_body(body: &[u8], args: &ReadArgs) -> CliResult<Option<String>> {
    if args.no_save {
        return Ok(None);
    }
    write_raw(&args.output, body).map_err(|err| dump_error("save failed", err))?;
    Ok(Some(args.output.display().to_string()))
}
