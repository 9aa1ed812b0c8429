//! Input readers.
//!
//! Turns an uploaded file into rows of cell text. XLSX/XLSM workbooks are
//! read from their first sheet; CSV and TSV files go through [`crate::csv`].

mod relationships;
mod worksheet;

use std::io::Cursor;
use std::path::Path;

use zip::ZipArchive;

use crate::csv::{parse_delimited, Delimiter};
use crate::error::{CloudError, Result};
use crate::types::Row;

use relationships::{first_sheet_path, parse_shared_strings, parse_workbook_relationships};
use worksheet::read_sheet_rows;

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Xlsx,
    Csv,
    Tsv,
}

impl InputFormat {
    /// Pick a format from a file name's extension. Unknown or missing
    /// extensions are treated as a workbook.
    #[must_use]
    pub fn from_file_name(name: &str) -> Self {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("csv") => Self::Csv,
            Some("tsv" | "tab") => Self::Tsv,
            _ => Self::Xlsx,
        }
    }
}

/// Read all rows of `data` in the given format.
///
/// # Errors
/// Returns [`CloudError::Zip`], [`CloudError::Xml`] or [`CloudError::Parse`]
/// when a workbook is malformed. Delimited text never fails.
pub fn read_rows(data: &[u8], format: InputFormat) -> Result<Vec<Row>> {
    match format {
        InputFormat::Xlsx => read_first_sheet(data),
        InputFormat::Csv => Ok(parse_delimited(data, Delimiter::Comma)),
        InputFormat::Tsv => Ok(parse_delimited(data, Delimiter::Tab)),
    }
}

/// Read the rows of the first sheet (in workbook order) of an XLSX file.
///
/// # Errors
/// Fails if the archive or its XML parts are malformed, or the workbook has
/// no sheets.
pub fn read_first_sheet(data: &[u8]) -> Result<Vec<Row>> {
    let cursor = Cursor::new(data);
    let mut archive = ZipArchive::new(cursor)?;

    let rels = parse_workbook_relationships(&mut archive);
    let shared_strings = parse_shared_strings(&mut archive, rels.shared_strings.as_deref())?;

    let Some((name, path)) = first_sheet_path(&mut archive, &rels.worksheets)? else {
        return Err(CloudError::Parse("workbook has no sheets".into()));
    };

    let rows = read_sheet_rows(&mut archive, &path, &shared_strings)?;
    log::debug!(
        "read {} rows from sheet '{}' ({} shared strings)",
        rows.len(),
        name,
        shared_strings.len()
    );
    Ok(rows)
}
