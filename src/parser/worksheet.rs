//! First-sheet cell reader: sheet XML into rows of cell text.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::{BufReader, Read, Seek};
use zip::ZipArchive;

use crate::cell_ref::parse_cell_ref_bytes;
use crate::error::{CloudError, Result};
use crate::types::{set_cell, Row};
use crate::words::EXPLANATION_COLUMN;

/// Highest row number a worksheet may hold (Excel's limit).
pub(super) const MAX_ROWS: u32 = 1_048_576;

/// Cell type tag from the `t` attribute of a `<c>` element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) enum CellTypeTag {
    Shared,
    Inline,
    Str,
    Bool,
    Error,
    Default,
}

pub(super) fn parse_cell_type_tag(value: &[u8]) -> CellTypeTag {
    match value {
        b"s" => CellTypeTag::Shared,
        b"b" => CellTypeTag::Bool,
        b"e" => CellTypeTag::Error,
        b"str" => CellTypeTag::Str,
        b"inlineStr" => CellTypeTag::Inline,
        _ => CellTypeTag::Default,
    }
}

pub(super) fn parse_u32_bytes(value: &[u8]) -> Option<u32> {
    let mut num: u32 = 0;
    let mut seen = false;
    for &b in value {
        if !b.is_ascii_digit() {
            return None;
        }
        seen = true;
        num = num.saturating_mul(10).saturating_add(u32::from(b - b'0'));
    }
    if seen {
        Some(num)
    } else {
        None
    }
}

/// Text of a cell given its raw `<v>`/`<t>` content and type tag.
///
/// Numbers go through `f64` so "1.50" reads as "1.5"; errors and dangling
/// shared-string indices read as empty.
pub(super) fn cell_text(raw: &str, tag: CellTypeTag, shared_strings: &[String]) -> Option<String> {
    match tag {
        CellTypeTag::Shared => {
            let idx = parse_u32_bytes(raw.trim().as_bytes())?;
            let idx = usize::try_from(idx).ok()?;
            shared_strings.get(idx).cloned()
        }
        CellTypeTag::Inline | CellTypeTag::Str => Some(raw.to_string()),
        CellTypeTag::Bool => Some(if raw.trim() == "1" { "true" } else { "false" }.to_string()),
        CellTypeTag::Error => None,
        CellTypeTag::Default => {
            let trimmed = raw.trim();
            match trimmed.parse::<f64>() {
                Ok(n) if n.is_finite() => Some(n.to_string()),
                _ => Some(trimmed.to_string()),
            }
        }
    }
}

struct CellAttrs {
    col: Option<u32>,
    row: Option<u32>,
    tag: CellTypeTag,
}

fn cell_attrs(e: &BytesStart<'_>) -> CellAttrs {
    let mut attrs = CellAttrs {
        col: None,
        row: None,
        tag: CellTypeTag::Default,
    };
    for attr in e.attributes().flatten() {
        match attr.key.as_ref() {
            b"r" => {
                if let Some((c, r)) = parse_cell_ref_bytes(&attr.value) {
                    attrs.col = Some(c);
                    attrs.row = Some(r);
                }
            }
            b"t" => attrs.tag = parse_cell_type_tag(&attr.value),
            _ => {}
        }
    }
    attrs
}

/// Read every row of the sheet at `path`.
///
/// Rows are indexed by their 1-based `r` attribute (or sequentially when it
/// is missing); gaps become empty rows. Cells without a reference follow the
/// previous cell in the same row. Only the word and explanation columns are
/// kept; anything to their right is skipped.
///
/// # Errors
/// A row numbered past [`MAX_ROWS`] is rejected as [`CloudError::Parse`].
pub(super) fn read_sheet_rows<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    path: &str,
    shared_strings: &[String],
) -> Result<Vec<Row>> {
    let file = archive.by_name(path)?;
    let reader = BufReader::new(file);
    let mut xml = Reader::from_reader(reader);
    xml.trim_text(false);

    let mut rows: Vec<Row> = Vec::new();
    let mut buf = Vec::new();

    let mut row_idx: usize = 0;
    let mut next_col: usize = 0;
    let mut current_row: Row = Row::new();
    let mut in_row = false;

    // Per-cell state
    let mut cell: Option<(usize, CellTypeTag)> = None;
    let mut value = String::new();
    let mut in_value = false;
    let mut in_inline = false;
    let mut in_phonetic = false;

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"row" => {
                    let number = e
                        .try_get_attribute("r")
                        .ok()
                        .flatten()
                        .and_then(|a| parse_u32_bytes(&a.value));
                    if let Some(n) = number.filter(|&n| n > MAX_ROWS) {
                        return Err(CloudError::Parse(format!(
                            "row {n} is beyond the last sheet row ({MAX_ROWS})"
                        )));
                    }
                    row_idx = number
                        .and_then(|r| usize::try_from(r.checked_sub(1)?).ok())
                        .unwrap_or(rows.len());
                    next_col = 0;
                    current_row = Row::new();
                    in_row = true;
                }
                b"c" if in_row => {
                    let attrs = cell_attrs(e);
                    let col = attrs
                        .col
                        .and_then(|c| usize::try_from(c).ok())
                        .unwrap_or(next_col);
                    cell = Some((col, attrs.tag));
                    value.clear();
                }
                b"v" if cell.is_some() => in_value = true,
                b"is" if cell.is_some() => in_inline = true,
                b"rPh" => in_phonetic = true,
                b"t" if in_inline && !in_phonetic => in_value = true,
                _ => {}
            },
            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"row" => {
                    // <row r="3"/> contributes nothing but keeps numbering
                }
                b"c" if in_row => {
                    let attrs = cell_attrs(e);
                    let col = attrs
                        .col
                        .and_then(|c| usize::try_from(c).ok())
                        .unwrap_or(next_col);
                    next_col = col.saturating_add(1);
                }
                _ => {}
            },
            Event::Text(ref e) if in_value => {
                value.push_str(&e.unescape()?);
            }
            Event::CData(ref e) if in_value => {
                value.push_str(&String::from_utf8_lossy(e.as_ref()));
            }
            Event::End(ref e) => match e.local_name().as_ref() {
                b"v" => in_value = false,
                b"t" if in_inline => in_value = false,
                b"rPh" => in_phonetic = false,
                b"is" => in_inline = false,
                b"c" => {
                    if let Some((col, tag)) = cell.take() {
                        if let Some(text) = cell_text(&value, tag, shared_strings) {
                            if col <= EXPLANATION_COLUMN && !text.trim().is_empty() {
                                set_cell(&mut current_row, col, text);
                            }
                        }
                        next_col = col.saturating_add(1);
                    }
                    in_value = false;
                    in_inline = false;
                }
                b"row" => {
                    if rows.len() < row_idx {
                        rows.resize(row_idx, Row::new());
                    }
                    let finished = std::mem::take(&mut current_row);
                    if let Some(slot) = rows.get_mut(row_idx) {
                        *slot = finished;
                    } else {
                        rows.push(finished);
                    }
                    in_row = false;
                }
                b"sheetData" => break,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(rows)
}
