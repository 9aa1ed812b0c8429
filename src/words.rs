//! Word extraction: spreadsheet rows into [`WordEntry`] records.

use crate::error::{CloudError, Result};
use crate::types::{cell_text, Row, WordEntry};

/// Column holding the word.
pub const WORD_COLUMN: usize = 0;
/// Column holding the optional explanation.
pub const EXPLANATION_COLUMN: usize = 1;

/// One entry per row whose first cell is non-blank, in row order.
///
/// # Errors
/// Returns [`CloudError::NoWords`] when no row yields a word.
pub fn extract_entries(rows: &[Row]) -> Result<Vec<WordEntry>> {
    let entries: Vec<WordEntry> = rows
        .iter()
        .filter_map(|row| {
            let word = cell_text(row, WORD_COLUMN)?;
            WordEntry::from_cells(word, cell_text(row, EXPLANATION_COLUMN))
        })
        .collect();

    if entries.is_empty() {
        return Err(CloudError::NoWords);
    }
    log::info!("extracted {} words from {} rows", entries.len(), rows.len());
    Ok(entries)
}
