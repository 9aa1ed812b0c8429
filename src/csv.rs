//! Minimal CSV/TSV reader producing spreadsheet-style rows.

use crate::types::{set_cell, Row};

/// Delimiter for parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
}

impl Delimiter {
    const fn as_char(self) -> char {
        match self {
            Self::Comma => ',',
            Self::Tab => '\t',
        }
    }
}

/// Parse CSV/TSV bytes into rows. Invalid UTF-8 is replaced, not rejected.
///
/// Blank lines and blank fields become empty cells; the caller decides which
/// rows are usable. A quoted field may span several lines.
#[must_use]
pub fn parse_delimited(data: &[u8], delim: Delimiter) -> Vec<Row> {
    let raw = String::from_utf8_lossy(data);
    let text = raw.strip_prefix('\u{feff}').unwrap_or(&raw);

    split_records(text, delim.as_char())
        .into_iter()
        .map(|fields| {
            let mut row = Row::new();
            for (col, field) in fields.into_iter().enumerate() {
                let value = field.trim();
                if !value.is_empty() {
                    set_cell(&mut row, col, value.to_string());
                }
            }
            row
        })
        .collect()
}

/// Split text into records of fields, respecting quoted fields.
///
/// Records end at `\n` or `\r\n` outside quotes. A trailing line break does
/// not start another record.
fn split_records(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut started = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\r' && chars.peek() == Some(&'\n') {
            continue;
        }
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    // Escaped quote
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
            continue;
        }
        match ch {
            '\n' => {
                fields.push(std::mem::take(&mut current));
                records.push(std::mem::take(&mut fields));
                started = false;
                continue;
            }
            '"' => in_quotes = true,
            c if c == sep => fields.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
        started = true;
    }
    if started {
        fields.push(current);
        records.push(fields);
    }
    records
}
