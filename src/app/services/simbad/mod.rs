//! SIMBAD coordinate-lookup parsing and fetching
//!
//! A SIMBAD sim-coo ASCII response takes one of three shapes depending on
//! how many objects fall inside the search radius:
//!
//! - [`single_object`] - a prose-style report for exactly one object
//! - [`object_list`] - a piped table of candidates sorted by distance
//! - a "no astronomical object found" marker when nothing matched
//!
//! [`parser`] tries the shapes in that fixed order and reports the outcome
//! as a tagged [`parser::SimbadOutcome`]; anything unrecognized degrades to
//! an empty record after logging a diagnostic excerpt, so one odd response
//! never aborts a bulk run.

pub mod object_list;
pub mod parser;
pub mod single_object;

#[cfg(test)]
mod tests;

// Re-export main types for easy access
pub use parser::{SimbadOutcome, diagnostic_excerpt, parse_record};

use crate::app::adapters::http::HttpClient;
use crate::app::models::{FetchedRecord, SimbadMeta, TargetCoord};
use crate::constants::SIMBAD_COO_URL;
use crate::{Error, Result};
use tracing::warn;

/// Build the sim-coo ASCII query URL for a target coordinate
///
/// The declination keeps an explicit sign, as the sim-coo `Coord` parameter
/// expects, and the radius is given in arcminutes.
pub fn query_url(target: &TargetCoord, radius_arcmin: f64) -> Result<String> {
    let url = format!(
        "{}?Coord={}{}&Radius={}&Radius.unit=arcmin&output.format=ASCII",
        SIMBAD_COO_URL,
        target.ra,
        target.signed_dec(),
        radius_arcmin
    );

    // The coordinate strings come straight from user input; reject anything
    // that would not survive as a URL before it reaches the network layer.
    url::Url::parse(&url).map_err(|e| Error::url(&url, e))?;
    Ok(url)
}

/// Fetch and parse the SIMBAD metadata for one target
///
/// The queried TIC is attached to the parsed record. A `NotFound` response
/// yields a record with only the `not_found` flag set; an `Unrecognized`
/// response is logged with a diagnostic excerpt and yields an empty record,
/// preserving forward progress for the surrounding batch.
pub async fn fetch_meta(
    client: &HttpClient,
    target: &TargetCoord,
    radius_arcmin: f64,
) -> Result<FetchedRecord<SimbadMeta>> {
    if !target.has_coordinates() {
        return Err(Error::input_format(
            format!("TIC {}", target.tic),
            "SIMBAD lookup requires both RA and Dec",
        ));
    }

    let url = query_url(target, radius_arcmin)?;
    let text = client.fetch_text(&url).await?;

    let meta = match parse_record(&text) {
        SimbadOutcome::SingleObject(mut meta) | SimbadOutcome::ObjectList(mut meta) => {
            meta.tic = Some(target.tic.clone());
            meta
        }
        SimbadOutcome::NotFound => SimbadMeta {
            not_found: true,
            ..SimbadMeta::empty_for(&target.tic)
        },
        SimbadOutcome::Unrecognized => {
            warn!(
                "Parsing SIMBAD result failed. tic: {} . text starts with: {}",
                target.tic,
                diagnostic_excerpt(&text)
            );
            SimbadMeta::empty_for(&target.tic)
        }
    };

    Ok(FetchedRecord {
        meta,
        raw_text: text,
    })
}
