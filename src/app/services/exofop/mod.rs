//! ExoFOP target-report parsing and fetching
//!
//! ExoFOP serves a plain-text report per TIC target: a block of labeled
//! lines (coordinates, aliases, CTL membership), a two-line fixed-column
//! stellar-parameter table, and a `MAGNITUDES` band table. [`parser`]
//! extracts the full field set, representing anything the report leaves
//! blank as `None` so downstream CSV keeps a stable column count.

pub mod parser;

#[cfg(test)]
mod tests;

// Re-export main types for easy access
pub use parser::parse_target_report;

use crate::Result;
use crate::app::adapters::http::HttpClient;
use crate::app::models::{ExofopMeta, FetchedRecord};
use crate::constants::EXOFOP_TARGET_REPORT_URL;

/// Build the plain-text report URL for a TIC
pub fn report_url(tic: &str) -> String {
    format!("{}?id={}", EXOFOP_TARGET_REPORT_URL, tic)
}

/// Fetch and parse the ExoFOP report for one TIC
///
/// The requested TIC is substituted when the report header failed to parse,
/// so the output row always identifies its target.
pub async fn fetch_meta(client: &HttpClient, tic: &str) -> Result<FetchedRecord<ExofopMeta>> {
    let url = report_url(tic);
    let text = client.fetch_text(&url).await?;

    let mut meta = parse_target_report(&text);
    meta.tic.get_or_insert_with(|| tic.to_string());

    Ok(FetchedRecord {
        meta,
        raw_text: text,
    })
}
