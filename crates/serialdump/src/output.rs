use std::io::{self, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use serialdump_dump::{header_row, rows, write_hex_dump, BYTES_PER_ROW};

use crate::exit::{io_error, CliResult};

#[derive(Clone, Debug, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated rows of 16 octets.
    Hex,
    /// The same rows rendered as a table.
    Table,
    /// One JSON document.
    Json,
    /// The body bytes, unmodified.
    Raw,
}

/// Where a dumped buffer came from.
#[derive(Debug, Clone, Copy)]
pub struct DumpSummary<'a> {
    /// `device` or `file`.
    pub source: &'a str,
    /// Device path or file path.
    pub name: &'a str,
    /// Where the raw body was saved, if anywhere.
    pub saved_to: Option<&'a str>,
}

#[derive(Serialize)]
struct RowOutput {
    offset: usize,
    bytes: Vec<String>,
}

#[derive(Serialize)]
struct DumpOutput<'a> {
    source: &'a str,
    name: &'a str,
    length: usize,
    saved_to: Option<&'a str>,
    rows: Vec<RowOutput>,
}

/// Print `data` to stdout in `format`. A closed stdout pipe is not an error.
pub fn print_dump(summary: &DumpSummary<'_>, data: &[u8], format: OutputFormat) -> CliResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match render_dump(&mut out, summary, data, format).and_then(|()| out.flush()) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(io_error("failed writing output", err)),
    }
}

pub fn render_dump<W: Write>(
    out: &mut W,
    summary: &DumpSummary<'_>,
    data: &[u8],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Hex => write_hex_dump(out, data),
        OutputFormat::Table => writeln!(out, "{}", dump_table(data)),
        OutputFormat::Json => {
            let doc = DumpOutput {
                source: summary.source,
                name: summary.name,
                length: data.len(),
                saved_to: summary.saved_to,
                rows: rows(data)
                    .map(|row| RowOutput {
                        offset: row.offset,
                        bytes: row.octets(),
                    })
                    .collect(),
            };
            serde_json::to_writer(&mut *out, &doc).map_err(io::Error::other)?;
            writeln!(out)
        }
        OutputFormat::Raw => out.write_all(data),
    }
}

fn dump_table(data: &[u8]) -> Table {
    let mut header = vec!["OFFSET".to_string()];
    header.extend(header_row().split('\t').skip(1).map(str::to_string));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);

    for row in rows(data) {
        let mut cells = Vec::with_capacity(BYTES_PER_ROW + 1);
        cells.push(format!("{:X}", row.offset));
        cells.extend(row.octets());
        table.add_row(cells);
    }
    table
}
