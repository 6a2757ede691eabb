//! Flat CSV codec for the address book file.
//!
//! The format is deliberately naive: fields are wrapped in double quotes on
//! the way out, but quotes are not an escape mechanism on the way in. A comma
//! or double quote inside a field does not survive a round trip.

use crate::error::{StoreError, StoreResult};
use crate::models::Contact;
use csv::{ByteRecord, ReaderBuilder};
use std::io;

/// First line of every exported file. Never validated on import.
pub const HEADER: &str = "Name,Phone,Email";

/// Line terminator used when writing.
pub const LINE_ENDING: &str = "\n";

/// One data line of an imported file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRow {
    /// 1-based line number within the file.
    pub line: usize,

    /// Name, phone and email, or the number of fields the line produced.
    pub fields: Result<[String; 3], usize>,
}

/// Render one contact as a file line (without terminator).
pub fn render_row(contact: &Contact) -> String {
    contact.to_csv_row()
}

/// Split file contents into data rows, dropping the first record as a header.
///
/// Quoting is disabled, so every comma separates fields and `"` is plain
/// data. `\n`, `\r\n` and a lone `\r` all end a line. Invalid UTF-8 is
/// replaced rather than rejected.
pub fn data_rows(bytes: &[u8]) -> StoreResult<Vec<DataRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = Vec::new();
    let mut record = ByteRecord::new();
    let mut lines = LineCounter::default();
    let mut header_seen = false;
    while reader
        .read_byte_record(&mut record)
        .map_err(|e| StoreError::Io(io::Error::from(e)))?
    {
        if !header_seen {
            header_seen = true;
            continue;
        }

        let mut offset = record.position().map_or(0, |pos| pos.byte() as usize);
        // a record never starts on a break; step past any skipped blank lines
        while matches!(bytes.get(offset), Some(b'\r' | b'\n')) {
            offset += 1;
        }
        rows.push(DataRow {
            line: lines.line_at(bytes, offset),
            fields: parse_fields(record.iter()),
        });
    }

    Ok(rows)
}

/// Maps byte offsets to 1-based line numbers. Offsets must not decrease.
///
/// The reader's own line count only advances on `\n`, so breaks are counted
/// here with `\r`, `\n` and `\r\n` each ending one line.
#[derive(Default)]
struct LineCounter {
    scanned: usize,
    breaks: usize,
}

impl LineCounter {
    fn line_at(&mut self, bytes: &[u8], offset: usize) -> usize {
        let end = offset.min(bytes.len());
        while self.scanned < end {
            match bytes[self.scanned] {
                b'\n' => self.breaks += 1,
                b'\r' if bytes.get(self.scanned + 1) != Some(&b'\n') => self.breaks += 1,
                _ => {}
            }
            self.scanned += 1;
        }
        self.breaks + 1
    }
}

/// Turn raw fields into name, phone and email.
///
/// Trailing empty fields are dropped and exactly three must remain. Every
/// `"` is removed from each field (not only the surrounding ones) and the
/// result is trimmed. On failure, returns the number of fields left.
pub fn parse_fields<'a>(fields: impl Iterator<Item = &'a [u8]>) -> Result<[String; 3], usize> {
    let mut fields: Vec<&[u8]> = fields.collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }

    match fields.as_slice() {
        [name, phone, email] => Ok([clean(name), clean(phone), clean(email)]),
        other => Err(other.len()),
    }
}

fn clean(field: &[u8]) -> String {
    String::from_utf8_lossy(field).replace('"', "").trim().to_string()
}
