//! Data models for catalog metadata harvesting
//!
//! This module contains the core data structures for target identification
//! and per-catalog metadata records. Every metadata struct carries the full
//! field set of its catalog with `Option` for anything the source did not
//! report, so CSV serialization always emits a fixed column count.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Target Identification
// =============================================================================

/// A TESS target identified by TIC number and (optionally) sky coordinates
///
/// Coordinates are kept as the raw decimal-degree strings from the input
/// list: they are only ever interpolated back into catalog query URLs, and
/// round-tripping through `f64` could perturb the digits upstream expects.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TargetCoord {
    /// TESS Input Catalog identifier
    pub tic: String,

    /// Right ascension in decimal degrees (empty when unknown)
    pub ra: String,

    /// Declination in decimal degrees, with optional leading sign
    pub dec: String,
}

impl TargetCoord {
    /// Create a target with coordinates
    pub fn new(tic: impl Into<String>, ra: impl Into<String>, dec: impl Into<String>) -> Self {
        Self {
            tic: tic.into(),
            ra: ra.into(),
            dec: dec.into(),
        }
    }

    /// Create a target known only by TIC number
    pub fn tic_only(tic: impl Into<String>) -> Self {
        Self {
            tic: tic.into(),
            ra: String::new(),
            dec: String::new(),
        }
    }

    /// Whether both coordinates are present
    pub fn has_coordinates(&self) -> bool {
        !self.ra.is_empty() && !self.dec.is_empty()
    }

    /// Declination with an explicit sign, as coordinate query URLs require
    /// (`49.86` becomes `+49.86`, `-33.57` is unchanged)
    pub fn signed_dec(&self) -> String {
        if self.dec.starts_with(|c: char| c.is_ascii_digit()) {
            format!("+{}", self.dec)
        } else {
            self.dec.clone()
        }
    }
}

// =============================================================================
// Per-Catalog Metadata Records
// =============================================================================

/// Metadata extracted from a SIMBAD coordinate lookup
///
/// All fields are optional: an `Unrecognized` parse yields an all-`None`
/// record (apart from the TIC the caller attaches) rather than aborting
/// a bulk run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SimbadMeta {
    /// TIC of the queried target, attached by the caller
    pub tic: Option<String>,

    /// SIMBAD main identifier (e.g. "V* V376 And")
    pub id: Option<String>,

    /// Object type code (e.g. "WU*")
    pub object_type: Option<String>,

    /// Johnson B magnitude
    pub mag_b: Option<f64>,

    /// Johnson V magnitude
    pub mag_v: Option<f64>,

    /// Sloan r magnitude
    pub mag_r: Option<f64>,

    /// Angular separation from the query coordinate in arcseconds
    /// (only reported by the tabular-list shape)
    pub angular_distance: Option<f64>,

    /// Alternative identifiers, comma-joined
    /// (only reported by the single-object shape)
    pub aliases: Option<String>,

    /// True when SIMBAD explicitly reported no object at the coordinate,
    /// as opposed to a response that could not be parsed
    pub not_found: bool,
}

impl SimbadMeta {
    /// Empty record substituted when a response cannot be parsed
    pub fn empty_for(tic: impl Into<String>) -> Self {
        Self {
            tic: Some(tic.into()),
            ..Self::default()
        }
    }
}

/// Metadata extracted from an ExoFOP plain-text target report
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExofopMeta {
    /// TIC identifier from the report header line
    pub tic: Option<String>,

    /// Right ascension in decimal degrees
    pub ra_deg: Option<String>,

    /// Declination in decimal degrees
    pub dec_deg: Option<String>,

    /// Right ascension in sexagesimal notation
    pub ra_sexa: Option<String>,

    /// Declination in sexagesimal notation
    pub dec_sexa: Option<String>,

    /// Star names and aliases, with the leading `TIC <id>` removed
    pub aliases: Option<String>,

    /// Whether the target is in the Candidate Target List
    pub in_ctl: bool,

    /// TIC contamination ratio (blank in the report for many targets)
    pub contamination_ratio: Option<f64>,

    /// Number of contaminating sources
    pub contamination_sources: Option<u32>,

    /// Johnson B magnitude
    pub mag_b: Option<f64>,

    /// Johnson V magnitude
    pub mag_v: Option<f64>,

    /// Sloan r magnitude
    pub mag_r: Option<f64>,

    /// TESS-band magnitude, kept as a fallback for the r band
    pub mag_tess: Option<f64>,

    /// Stellar radius in solar radii
    pub r_sun: Option<f64>,

    /// Stellar mass in solar masses
    pub m_sun: Option<f64>,

    /// Effective temperature in Kelvin
    pub t_eff: Option<f64>,

    /// Distance in parsecs, kept as the raw report token
    /// (the upstream field occasionally carries non-numeric annotations)
    pub distance_pc: Option<String>,
}

/// Metadata extracted from an ASAS-SN variable-star search result
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AsasSnMeta {
    /// TIC of the queried target, attached by the caller
    pub tic: Option<String>,

    /// ASAS-SN variable identifier
    pub id: Option<String>,

    /// Variability classification (e.g. "EW")
    pub object_type: Option<String>,

    /// Period in days; -1.0 encodes "NON PERIODIC"
    pub period: Option<f64>,

    /// Mean V magnitude
    pub mag_v: Option<f64>,

    /// Angular separation from the query coordinate in arcseconds
    pub angular_distance: Option<f64>,

    /// UUID of the variable's detail page, for URL reconstruction
    pub id_uuid: Option<String>,
}

impl AsasSnMeta {
    /// Empty record substituted when a response cannot be parsed
    pub fn empty_for(tic: impl Into<String>) -> Self {
        Self {
            tic: Some(tic.into()),
            ..Self::default()
        }
    }
}

// =============================================================================
// Zooniverse Tag Statistics
// =============================================================================

/// Per-subject tagging statistics aggregated over talk comments
///
/// `tag_counts` maps each tag (including canonical `like#...` forms) to the
/// number of distinct users who applied it. A `BTreeMap` keeps the JSON
/// rendering of the counts deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectTagStats {
    /// Zooniverse subject identifier
    pub subject_id: u64,

    /// Tag -> distinct-user count
    pub tag_counts: BTreeMap<String, u32>,

    /// Total number of talk comments inspected
    pub num_comments: usize,
}

impl SubjectTagStats {
    /// Count for a tag, zero when the tag was never applied
    pub fn count(&self, tag: &str) -> u32 {
        self.tag_counts.get(tag).copied().unwrap_or(0)
    }
}

// =============================================================================
// Fetch Results
// =============================================================================

/// A parsed metadata record paired with the raw text it was parsed from
///
/// The raw text is preserved so bulk runs can write a searchable dump of
/// everything that was fetched alongside the normalized CSV.
#[derive(Debug, Clone)]
pub struct FetchedRecord<T> {
    /// Parsed, normalized metadata
    pub meta: T,

    /// Raw response body (or the relevant HTML fragment for HTML sources)
    pub raw_text: String,
}
