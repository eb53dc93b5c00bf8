use std::fs;

use crate::cmd::HexdumpArgs;
use crate::exit::{io_error, CliResult, SUCCESS};
use crate::output::{print_dump, DumpSummary, OutputFormat};

pub fn run(args: HexdumpArgs, format: OutputFormat) -> CliResult<i32> {
    let data = fs::read(&args.file)
        .map_err(|err| io_error(&format!("failed reading {}", args.file.display()), err))?;
    tracing::debug!(file = %args.file.display(), bytes = data.len(), "loaded dump file");

    let name = args.file.display().to_string();
    let summary = DumpSummary {
        source: "file",
        name: &name,
        saved_to: None,
    };
    print_dump(&summary, &data, format)?;

    Ok(SUCCESS)
}
