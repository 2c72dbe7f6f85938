//! Raw-text dump files
//!
//! Bulk runs keep the raw catalog responses next to the normalized CSV.
//! Each record is preceded by a `------ TIC <tic>` marker line so a dump
//! covering hundreds of targets can be searched for one TIC directly.

use crate::constants::TEXT_DUMP_SEPARATOR;

/// Join raw response texts into one searchable dump
///
/// `records` pairs each TIC with the raw text fetched for it. The dump
/// always ends with a newline so concatenating dumps stays well-formed.
pub fn join_labeled_dump<'a>(records: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let mut dump = String::new();
    for (tic, text) in records {
        dump.push('\n');
        dump.push_str(TEXT_DUMP_SEPARATOR);
        dump.push_str(" TIC ");
        dump.push_str(tic);
        dump.push('\n');
        dump.push_str(text);
    }
    dump.push('\n');
    dump
}
