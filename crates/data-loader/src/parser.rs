//! Parser for the tab-separated filmography file.
//!
//! Format, one record per line, no header:
//!
//! ```text
//! year\ttitle\tfirstName\tlastName\tgender\tcharacter
//! ```
//!
//! Trailing whitespace (including `\r`) is stripped before splitting.
//! Blank lines are skipped. Any other malformed line fails the whole load.

use crate::error::{DataLoadError, Result};
use crate::types::FilmographyRow;
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Number of tab-separated columns in every record
pub const FIELD_COUNT: usize = 6;

/// Parse one line into a row.
///
/// `line_no` is 1-based and only used for error context.
/// Returns `Ok(None)` for a blank line.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<FilmographyRow>> {
    let line = line.trim_end();
    if line.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != FIELD_COUNT {
        return Err(DataLoadError::FieldCountMismatch {
            expected: FIELD_COUNT,
            found: fields.len(),
            line: line_no,
        });
    }

    let year = fields[0].trim().parse().map_err(|e| DataLoadError::ParseError {
        line: line_no,
        reason: format!("Invalid year {:?}: {}", fields[0], e),
    })?;

    Ok(Some(FilmographyRow {
        year,
        title: fields[1].to_string(),
        first_name: fields[2].to_string(),
        last_name: fields[3].to_string(),
        gender: fields[4].to_string(),
        character: fields[5].to_string(),
    }))
}

/// Decode one raw line: UTF-8 when valid, otherwise ISO-8859-1 (Latin-1).
///
/// Latin-1 maps every byte directly to the code point of the same value,
/// so names like `Am\xe9lie` come through as `Amélie` instead of a
/// replacement character that no query could ever match.
pub fn decode_line(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Cow::Borrowed(s),
        Err(_) => Cow::Owned(bytes.iter().map(|&b| b as char).collect()),
    }
}

/// Streams parsed rows out of any buffered reader.
///
/// Each line is decoded with [`decode_line`], so files mixing UTF-8 and
/// Latin-1 rows still load.
pub struct RowReader<R> {
    reader: R,
    buf: Vec<u8>,
    line_no: usize,
}

impl<R: BufRead> RowReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line_no: 0,
        }
    }
}

impl<R: BufRead> Iterator for RowReader<R> {
    type Item = Result<FilmographyRow>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e.into())),
            }
            self.line_no += 1;

            let line = decode_line(&self.buf);
            if let Cow::Owned(_) = line {
                debug!("Line {} is not valid UTF-8, decoded as Latin-1", self.line_no);
            }
            match parse_line(&line, self.line_no) {
                Ok(Some(row)) => return Some(Ok(row)),
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Open a filmography file for streaming
pub fn open_rows(path: &Path) -> Result<RowReader<BufReader<File>>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;
    Ok(RowReader::new(BufReader::new(file)))
}
