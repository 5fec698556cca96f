use std::borrow::Cow;
use std::path::Path;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use super::grammar::LogGrammar;
use super::types::RequestEvent;
use crate::args::LogEncoding;
use crate::error::{AnalyticsError, AppError, AppResult};

/// Reads the whole access log into memory as an ordered event list.
///
/// Lines that do not match the grammar are skipped.
///
/// # Errors
///
/// Returns an error when the file cannot be opened or read, or when a line is
/// not valid in the selected encoding.
pub async fn load_events(
    grammar: &LogGrammar,
    path: &Path,
    encoding: LogEncoding,
) -> AppResult<Vec<RequestEvent>> {
    let read_error = |err: std::io::Error| {
        AppError::analytics(AnalyticsError::ReadLog {
            path: path.to_path_buf(),
            source: err,
        })
    };
    let file = tokio::fs::File::open(path).await.map_err(read_error)?;
    let mut reader = BufReader::new(file);
    let mut buffer = Vec::new();
    let mut events = Vec::new();
    let mut line_number: u64 = 0;
    let mut skipped: u64 = 0;

    loop {
        buffer.clear();
        let bytes = reader
            .read_until(b'\n', &mut buffer)
            .await
            .map_err(read_error)?;
        if bytes == 0 {
            break;
        }
        for record in split_records(&buffer) {
            line_number = line_number.saturating_add(1);
            let line = decode_line(record, encoding).map_err(|err| {
                AppError::analytics(AnalyticsError::DecodeLine {
                    path: path.to_path_buf(),
                    line: line_number,
                    source: err,
                })
            })?;
            match grammar.parse_line(&line) {
                Some(event) => events.push(event),
                None => skipped = skipped.saturating_add(1),
            }
        }
    }

    debug!(
        "Skipped {} of {} lines in '{}'",
        skipped,
        line_number,
        path.display()
    );
    info!(
        "Loaded {} request events from '{}' ({})",
        events.len(),
        path.display(),
        encoding.as_str()
    );
    Ok(events)
}

/// Splits one chunk read up to `\n` into lines. `\r\n`, `\n` and a lone `\r`
/// all end a line.
pub(super) fn split_records(chunk: &[u8]) -> impl Iterator<Item = &[u8]> {
    let chunk = chunk.strip_suffix(b"\n").unwrap_or(chunk);
    let chunk = chunk.strip_suffix(b"\r").unwrap_or(chunk);
    chunk.split(|byte| *byte == b'\r')
}

pub(super) fn decode_line(
    bytes: &[u8],
    encoding: LogEncoding,
) -> Result<Cow<'_, str>, std::str::Utf8Error> {
    match encoding {
        LogEncoding::Utf8 => std::str::from_utf8(bytes).map(Cow::Borrowed),
        LogEncoding::Latin1 => Ok(Cow::Owned(bytes.iter().map(|&byte| char::from(byte)).collect())),
    }
}
