//! Column lookup for pipe-delimited tables with ragged widths
//!
//! SIMBAD's tabular object lists separate columns with `|`, but the widths
//! differ between responses (they grow with the widest value in each
//! column). Cells are therefore located from the header row's own delimiter
//! positions rather than any fixed offsets, and the `~` placeholder the
//! format uses for "no data" is mapped to `None` rather than kept as text.

use crate::constants::PIPED_MISSING_VALUE;

/// Read the cell under the column whose header starts with `label`
///
/// The column is the first `|` in `header` that is followed, after optional
/// whitespace, by `label`. The cell is the run of non-`|` characters in
/// `row` starting just past that delimiter, trimmed. Returns `None` when
/// the column is absent, the cell is blank, or the cell holds the `~`
/// placeholder (the format's explicit "no data" marker, distinct from an
/// empty string).
pub fn read_piped_field(header: &str, row: &str, label: &str) -> Option<String> {
    let idx = find_column(header, label)?;
    let cell_start = row.get(idx + 1..)?;

    let cell = match cell_start.find('|') {
        Some(end) => &cell_start[..end],
        None => cell_start,
    };

    let trimmed = cell.trim();
    if trimmed.is_empty() || trimmed == PIPED_MISSING_VALUE {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Read the cell under `label` and parse it as a float
///
/// Shares the blank/`~` handling of [`read_piped_field`]; malformed numeric
/// text yields `None`, never an error.
pub fn read_piped_f64(header: &str, row: &str, label: &str) -> Option<f64> {
    read_piped_field(header, row, label)?.parse().ok()
}

/// Byte offset of the `|` introducing the column labeled `label`
fn find_column(header: &str, label: &str) -> Option<usize> {
    for (idx, _) in header.match_indices('|') {
        let after = &header[idx + 1..];
        if after.trim_start().starts_with(label) {
            return Some(idx);
        }
    }
    None
}
