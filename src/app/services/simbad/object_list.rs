//! Parser for the SIMBAD tabular object-list shape
//!
//! When several objects fall inside the search radius, SIMBAD returns a
//! piped table: a `#`-prefixed header of column titles, a dashed separator,
//! then numbered data rows sorted by angular distance. Only the row
//! numbered `1` is read: upstream sorts by distance, so row 1 is the
//! closest match. Aliases are not available in this shape.

use crate::app::models::SimbadMeta;
use crate::app::services::columnar::{read_piped_f64, read_piped_field};
use once_cell::sync::Lazy;
use regex::Regex;

// The leading [ ]* must be a literal space class rather than \s, which
// would swallow the newline in front of the header line.
static LIST_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^([ ]*#\s*\|.+)\n-+\|.+\n(1\s*\|.+)").expect("object list pattern")
});

/// Try to parse `text` as a tabular object list
///
/// Returns `None` when the header/separator/first-row pattern is absent,
/// signalling the next strategy should be tried. Never errors.
pub fn parse(text: &str) -> Option<SimbadMeta> {
    let captures = LIST_SHAPE.captures(text)?;
    let header = captures.get(1)?.as_str();
    let row = captures.get(2)?.as_str();

    Some(SimbadMeta {
        tic: None,
        id: read_piped_field(header, row, "identifier"),
        object_type: read_piped_field(header, row, "typ"),
        mag_b: read_piped_f64(header, row, "Mag B"),
        mag_v: read_piped_f64(header, row, "Mag V"),
        mag_r: read_piped_f64(header, row, "Mag R"),
        angular_distance: read_piped_f64(header, row, "dist"),
        aliases: None,
        not_found: false,
    })
}
