use serialdump_frame::{DEFAULT_MAX_BODY, RESPONSE_HEADER_SIZE};
use serialdump_transport::{DEFAULT_BAUD_RATE, DEFAULT_DEVICE};

use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("serialdump {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: serialdump");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "build_target: {}",
        option_env!("SERIALDUMP_BUILD_TARGET").unwrap_or("unknown")
    );
    println!("target_os: {}", std::env::consts::OS);
    println!("target_arch: {}", std::env::consts::ARCH);
    println!("git_hash: {}", option_env!("GIT_HASH").unwrap_or("unknown"));
    println!("default_device: {DEFAULT_DEVICE}");
    println!("default_baud: {DEFAULT_BAUD_RATE}");
    println!("response_header_bytes: {RESPONSE_HEADER_SIZE}");
    println!("default_max_body: {DEFAULT_MAX_BODY}");

    Ok(SUCCESS)
}
