//! Parser for `mysqladmin extended-status` table dumps.
//!
//! Only data rows are recognised:
//!
//! ```text
//! +-----------------------+-------+   <- border, skipped
//! | Bytes_sent            | 1024  |   <- data row
//! ```
//!
//! Anything that does not look like a data row (headers with a non-numeric
//! value, borders, blank lines, free text) is skipped silently.

use super::schema::RawSample;
use crate::utils::config::{BORDER_MARKER, ROW_DELIMITER};
use log::trace;
use std::io::BufRead;

/// Extract a sample from a single line
///
/// **Public** - used by the collector and by tests
///
/// # Returns
/// `Some(sample)` for a data row, `None` for any other line
pub fn parse_line(line: &str) -> Option<RawSample> {
    if !line.starts_with(ROW_DELIMITER) || line.contains(BORDER_MARKER) {
        return None;
    }

    let mut fields = line.split(ROW_DELIMITER);
    // Leading empty field before the first delimiter
    fields.next()?;
    let name = fields.next()?.trim();
    let value = fields.next()?.trim().parse::<i64>().ok()?;

    Some(RawSample::new(name, value))
}

/// Parse every data row of a snapshot, in file order
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `reader` - Buffered snapshot contents
///
/// # Returns
/// Samples in the order they appear
///
/// # Errors
/// Only I/O errors from the reader. Malformed rows are skipped, and
/// invalid UTF-8 is decoded lossily.
pub fn parse_snapshot<R: BufRead>(reader: R) -> std::io::Result<Vec<RawSample>> {
    let mut samples = Vec::new();

    for line in reader.split(b'\n') {
        let line = line?;
        let text = String::from_utf8_lossy(&line);
        let text = text.strip_suffix('\r').unwrap_or(&text);

        match parse_line(text) {
            Some(sample) => samples.push(sample),
            None => trace!("Skipping line: {:?}", text),
        }
    }

    Ok(samples)
}
