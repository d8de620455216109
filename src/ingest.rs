//! Reading the initial entries from standard input.
//!
//! Every line becomes one [`Line`], blank lines included. The terminator
//! (`\n`, or `\r\n`) is stripped; nothing else is trimmed. Bytes that are not
//! valid UTF-8 are replaced rather than rejected so one odd line cannot lose
//! the rest of the input.
//!
//! A read error after at least one line is logged and the lines read so far
//! are kept, including a last line cut short by the error. A read error before
//! any byte is returned as [`Error::Read`].

use crate::error::{Error, Result};
use crate::item::Line;
use std::io::BufRead;

/// Reads `reader` to end-of-stream, one [`Line`] per input line.
pub fn read_lines<R: BufRead>(mut reader: R) -> Result<Vec<Line>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                    if buf.last() == Some(&b'\r') {
                        buf.pop();
                    }
                }
                lines.push(Line::new(String::from_utf8_lossy(&buf)));
            }
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(source) => {
                let line = lines.len() + 1;
                // Bytes of a line cut short by the error are still a line.
                if !buf.is_empty() {
                    lines.push(Line::new(String::from_utf8_lossy(&buf)));
                }
                if lines.is_empty() {
                    return Err(Error::Read { source });
                }
                tracing::warn!(
                    error = %source,
                    line,
                    kept = lines.len(),
                    "read error on standard input, keeping lines read so far"
                );
                break;
            }
        }
    }

    tracing::info!(count = lines.len(), "read input lines");
    Ok(lines)
}
