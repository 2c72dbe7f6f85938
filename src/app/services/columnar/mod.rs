//! Columnar text record extraction
//!
//! Astronomical catalogs that predate machine-readable APIs publish ASCII
//! reports in two recurring layouts, both parsed here:
//!
//! - [`fixed_column`] - two-line records where each value token begins at the
//!   same character offset as its header label (ExoFOP stellar parameters)
//! - [`piped_table`] - `|`-delimited tables whose column widths vary from
//!   table to table, so cells must be located via the header row's own
//!   delimiter positions (SIMBAD object lists)
//!
//! Both readers are pure and total: a missing header, blank cell, explicit
//! `~` placeholder, or unparsable number degrades to `None`. They never
//! return an error and never panic, which lets bulk runs process thousands
//! of scraped reports without one malformed record aborting the rest.

pub mod fixed_column;
pub mod piped_table;

#[cfg(test)]
mod tests;

// Re-export main types for easy access
pub use fixed_column::FixedColumnRecord;
pub use piped_table::{read_piped_f64, read_piped_field};
