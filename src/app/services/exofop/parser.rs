//! Parser for the ExoFOP plain-text target report
//!
//! The report mixes three layouts: single labeled lines (`In CTL   Yes`),
//! a two-line fixed-column stellar-parameter table read via
//! [`FixedColumnRecord`], and a `MAGNITUDES` table of `<band> <value> ...`
//! rows. Labeled-line patterns keep their whitespace classes to `[ \t]` so
//! a blank value never swallows the following line's first token.

use crate::app::models::ExofopMeta;
use crate::app::services::columnar::FixedColumnRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

static TIC_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^TIC\s+ID\s+(\d+)").expect("tic id pattern"));

static RA_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^RA\s\([^)]+\)[ \t]+(\S+)[ \t]+(\S+)").expect("ra pattern"));

static DEC_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^Dec\s\([^)]+\)[ \t]+(\S+)[ \t]+(\S+)").expect("dec pattern"));

static ALIASES_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^Star Name & Aliases[ \t]+(.+)").expect("aliases pattern"));

static IN_CTL_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^In CTL[ \t]+(\S+)").expect("in ctl pattern"));

static CONTAM_RATIO_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^TIC Contamination Ratio[ \t]+(\S+)").expect("contamination ratio pattern")
});

static CONTAM_SOURCES_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^# of Contamination sources[ \t]+(\S+)")
        .expect("contamination sources pattern")
});

static STELLAR_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(Telescope[ \t].+)\n+(.+)").expect("stellar block pattern"));

/// Parse an ExoFOP target report into its full metadata field set
///
/// Total over arbitrary input: a report with missing sections yields `None`
/// fields, never an error. The coordinate warning mirrors what matters in
/// practice - without RA/Dec the target cannot be cross-matched elsewhere.
pub fn parse_target_report(text: &str) -> ExofopMeta {
    let tic = capture(&TIC_ID, text, 1);

    let (ra_sexa, ra_deg) = pair(&RA_LINE, text);
    let (dec_sexa, dec_deg) = pair(&DEC_LINE, text);
    if ra_sexa.is_none() || dec_sexa.is_none() {
        warn!(
            "Cannot get coordinates for TIC {}",
            tic.as_deref().unwrap_or("<unknown>")
        );
    }

    let aliases = capture(&ALIASES_LINE, text, 1).map(|raw| strip_own_tic(&raw, tic.as_deref()));
    let in_ctl = capture(&IN_CTL_LINE, text, 1).as_deref() == Some("Yes");

    let mut meta = ExofopMeta {
        tic,
        ra_deg,
        dec_deg,
        ra_sexa,
        dec_sexa,
        aliases,
        in_ctl,
        contamination_ratio: capture(&CONTAM_RATIO_LINE, text, 1).and_then(|s| s.parse().ok()),
        contamination_sources: capture(&CONTAM_SOURCES_LINE, text, 1)
            .and_then(|s| s.parse().ok()),
        mag_b: band_magnitude(text, "B"),
        mag_v: band_magnitude(text, "V"),
        mag_r: band_magnitude(text, "r"),
        mag_tess: band_magnitude(text, "TESS"),
        ..ExofopMeta::default()
    };

    if let Some(captures) = STELLAR_BLOCK.captures(text) {
        let record = FixedColumnRecord::new(
            captures.get(1).map_or("", |m| m.as_str()),
            captures.get(2).map_or("", |m| m.as_str()),
        );
        meta.r_sun = record.read_f64("Radius (R_Sun)");
        meta.m_sun = record.read_f64("Mass (M_Sun)");
        meta.t_eff = record.read_f64("Teff (K)");
        // Kept as the raw token: upstream occasionally annotates this field
        meta.distance_pc = record.read_field("Distance (pc)");
    }

    meta
}

/// Magnitude from a `<band> <value> ...` row of the MAGNITUDES table
fn band_magnitude(text: &str, band: &str) -> Option<f64> {
    let pattern = format!(r"(?m)^{}[ \t]+([0-9.]+)", regex::escape(band));
    let re = Regex::new(&pattern).ok()?;
    re.captures(text)?.get(1)?.as_str().parse().ok()
}

/// Remove the target's own `TIC <id>` entry from its alias list
fn strip_own_tic(aliases: &str, tic: Option<&str>) -> String {
    let Some(tic) = tic else {
        return aliases.to_string();
    };
    let pattern = format!(r"TIC {},?\s*", regex::escape(tic));
    match Regex::new(&pattern) {
        Ok(re) => re.replace(aliases, "").into_owned(),
        Err(_) => aliases.to_string(),
    }
}

fn capture(re: &Regex, text: &str, group: usize) -> Option<String> {
    re.captures(text)?
        .get(group)
        .map(|m| m.as_str().to_string())
}

fn pair(re: &Regex, text: &str) -> (Option<String>, Option<String>) {
    match re.captures(text) {
        Some(captures) => (
            captures.get(1).map(|m| m.as_str().to_string()),
            captures.get(2).map(|m| m.as_str().to_string()),
        ),
        None => (None, None),
    }
}
