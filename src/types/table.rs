/// One spreadsheet row as cell text by 0-based column; `None` marks an
/// empty or absent cell.
pub type Row = Vec<Option<String>>;

/// Text of column `col`, if the cell is present.
#[must_use]
pub fn cell_text(row: &Row, col: usize) -> Option<&str> {
    row.get(col).and_then(Option::as_deref)
}

/// Place `value` at column `col`, padding the row with empty cells.
pub fn set_cell(row: &mut Row, col: usize, value: String) {
    if row.len() <= col {
        row.resize(col + 1, None);
    }
    if let Some(slot) = row.get_mut(col) {
        *slot = Some(value);
    }
}
