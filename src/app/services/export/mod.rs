//! Output rendering: CSV tables, raw-text dumps, and markdown listings

pub mod csv_writer;
pub mod markdown;
pub mod text_dump;

#[cfg(test)]
mod tests;

pub use csv_writer::CsvOptions;
