//! Parser for the SIMBAD single-object report shape
//!
//! When exactly one object matches, SIMBAD returns a prose-style report:
//! a dashed delimiter line, a blank line, then an `Object <name> --- <type>
//! --- OID=...` headline followed by coordinate, flux, and identifier
//! sections. Angular distance is not defined for this shape; a single-object
//! lookup carries no distance from the query center.

use crate::app::models::SimbadMeta;
use crate::constants::SIMBAD_FLUX_BANDS;
use once_cell::sync::Lazy;
use regex::Regex;

static OBJECT_HEADLINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^-{6,}[ \t]*\n\nObject\s+(.+?)\s+-{3,}(.+?)-{3,}\s+OID")
        .expect("object headline pattern")
});

static IDENTIFIERS_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?ms)^Identifiers[^\n]+:\n(.+?)\n\n").expect("identifiers block pattern")
});

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s\s+").expect("whitespace run pattern"));

/// Try to parse `text` as a single-object report
///
/// Returns `None` when the headline pattern is absent, signalling the next
/// strategy should be tried. Never errors.
pub fn parse(text: &str) -> Option<SimbadMeta> {
    let captures = OBJECT_HEADLINE.captures(text)?;

    let id = captures.get(1)?.as_str().to_string();
    let object_type = captures.get(2)?.as_str().trim().to_string();

    let (band_b, band_v, band_r) = SIMBAD_FLUX_BANDS;

    Some(SimbadMeta {
        tic: None,
        id: Some(id),
        object_type: Some(object_type),
        mag_b: flux_magnitude(text, band_b),
        mag_v: flux_magnitude(text, band_v),
        mag_r: flux_magnitude(text, band_r),
        angular_distance: None,
        aliases: aliases(text),
        not_found: false,
    })
}

/// Magnitude from a `Flux <band> : <number>` line, `None` when the band is
/// absent or the number does not parse
fn flux_magnitude(text: &str, band: &str) -> Option<f64> {
    let pattern = format!(r"(?m)^Flux {} : ([0-9.\-]+)", regex::escape(band));
    let re = Regex::new(&pattern).ok()?;
    re.captures(text)?.get(1)?.as_str().parse().ok()
}

/// Alias list from the block under the `Identifiers (n):` header
///
/// The block lays identifiers out in whitespace-separated columns across
/// several lines; newlines are collapsed and column gaps become `", "`.
fn aliases(text: &str) -> Option<String> {
    let block = IDENTIFIERS_BLOCK.captures(text)?.get(1)?.as_str();
    let flattened = block.replace('\n', "  ");
    let joined = WHITESPACE_RUN
        .replace_all(flattened.trim(), ", ")
        .into_owned();
    Some(joined)
}
