use std::io::{Read, Write};

use bytes::Bytes;

use crate::codec::FrameConfig;
use crate::error::Result;
use crate::reader::ResponseReader;
use crate::request::Request;
use crate::writer::RequestWriter;

/// Send `request` on `stream` and return the body of the device's response.
///
/// Waits `config.settle_delay` between writing the request and reading the
/// header. Read timeouts are whatever the stream itself enforces.
pub fn exchange<S: Read + Write>(stream: S, request: &Request, config: &FrameConfig) -> Result<Bytes> {
    let mut writer = RequestWriter::new(stream);
    writer.send(request)?;

    if !config.settle_delay.is_zero() {
        tracing::debug!(
            settle_ms = config.settle_delay.as_millis() as u64,
            "waiting for device"
        );
        std::thread::sleep(config.settle_delay);
    }

    let mut reader = ResponseReader::with_config(writer.into_inner(), config.clone());
    reader.read_response()
}
