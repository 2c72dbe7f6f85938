//! Application constants for ticmeta
//!
//! This module contains the upstream catalog endpoints, text-format markers,
//! default values, and output column orders used throughout the harvester.

// =============================================================================
// Upstream Catalog Endpoints
// =============================================================================

/// ExoFOP plain-text target report (append `?id=<tic>`)
pub const EXOFOP_TARGET_REPORT_URL: &str =
    "https://exofop.ipac.caltech.edu/tess/download_target.php";

/// ExoFOP human-readable target page (append `?id=<tic>`)
pub const EXOFOP_TARGET_PAGE_URL: &str = "https://exofop.ipac.caltech.edu/tess/target.php";

/// SIMBAD coordinate lookup returning an ASCII report
///
/// URL format reference: http://simbad.u-strasbg.fr/simbad/sim-help?Page=sim-url
pub const SIMBAD_COO_URL: &str = "http://simbad.u-strasbg.fr/simbad/sim-coo";

/// ASAS-SN variable-star search page (HTML)
pub const ASAS_SN_VARIABLES_URL: &str = "https://asas-sn.osu.edu/variables";

/// TESS EB portal listing page (HTML, paginated)
pub const TESSEB_PORTAL_URL: &str = "http://tessebs.villanova.edu/";

/// Zooniverse talk API root
pub const TALK_API_URL: &str = "https://talk.zooniverse.org";

/// Zooniverse main API root (subject metadata)
pub const ZOONIVERSE_API_URL: &str = "https://www.zooniverse.org/api";

/// Planet Hunters TESS talk pages (append `/<subject_id>`)
pub const PHT_SUBJECT_URL: &str =
    "https://www.zooniverse.org/projects/nora-dot-eisner/planet-hunters-tess/talk/subjects";

/// Zooniverse subject image thumbnail (append `/<image_uuid>.png`)
pub const PHT_THUMBNAIL_URL: &str =
    "https://thumbnails.zooniverse.org/999x250/panoptes-uploads.zooniverse.org/subject_location";

/// Talk section identifier for the Planet Hunters TESS project
pub const PHT_TALK_SECTION: &str = "project-7929";

// =============================================================================
// Text Format Markers
// =============================================================================

/// Marker line prefix SIMBAD returns when a coordinate search matches nothing
pub const SIMBAD_NOT_FOUND_MARKER: &str = "!! No astronomical object found";

/// Placeholder SIMBAD piped tables use for "no data" cells
pub const PIPED_MISSING_VALUE: &str = "~";

/// Separator line prefix used between records in raw-text dump files
pub const TEXT_DUMP_SEPARATOR: &str = "------";

/// SIMBAD flux bands extracted from single-object reports
///
/// The lowercase `r` is deliberate: SIMBAD reports Sloan r rather than
/// Johnson R for most eclipsing-binary candidates.
pub const SIMBAD_FLUX_BANDS: (&str, &str, &str) = ("B", "V", "r");

// =============================================================================
// Defaults
// =============================================================================

/// Default search radius around a target coordinate, in arcminutes
pub const DEFAULT_RADIUS_ARCMIN: f64 = 2.0;

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default delimiter for CSV output and target-list input
pub const DEFAULT_DELIMITER: char = '|';

/// User agent sent to upstream catalogs
pub const DEFAULT_USER_AGENT: &str = concat!("ticmeta/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Output Column Orders
// =============================================================================
//
// Missing fields serialize as empty strings, never as dropped columns, so
// downstream tools always see a fixed column count.

/// Column order for SIMBAD metadata CSV output
pub const SIMBAD_CSV_COLUMNS: &[&str] = &[
    "tic",
    "id",
    "type",
    "magB",
    "magV",
    "magR",
    "angularDistance",
    "aliases",
];

/// Column order for ExoFOP metadata CSV output
pub const EXOFOP_CSV_COLUMNS: &[&str] = &[
    "tic",
    "raDeg",
    "decDeg",
    "raSexa",
    "decSexa",
    "magB",
    "magV",
    "magR",
    "magTess",
    "distancePc",
    "rSun",
    "mSun",
    "tEff",
    "contamRatio",
    "contamSources",
    "inCtl",
    "aliases",
];

/// Column order for ASAS-SN metadata CSV output
pub const ASAS_SN_CSV_COLUMNS: &[&str] = &[
    "tic",
    "id",
    "type",
    "period",
    "magV",
    "angularDistance",
    "idUuid",
];

/// Header line for the tag-statistics summary CSV
pub const TAG_STATS_CSV_COLUMNS: &[&str] = &[
    "Subject_ID",
    "eb_like_count",
    "transit_like_count",
    "comment_count",
    "tag_count_json",
];

// =============================================================================
// Tag Canonicalization
// =============================================================================

/// Canonical tag for eclipsing-binary-flavored hashtags
pub const LIKE_EB_TAG: &str = "like#eclipsingbinary";

/// Canonical tag for transit-flavored hashtags
pub const LIKE_TRANSIT_TAG: &str = "like#transit";

/// Hashtags treated as meaning "eclipsing binary"
pub const EB_SYNONYMS: &[&str] = &[
    "#eclipsingbinary",
    "#eclipsing-binary",
    "#eb",
    "#eccentric-eb",
];

/// Hashtags treated as meaning "planet transit"
pub const TRANSIT_SYNONYMS: &[&str] = &[
    "#transit",
    "#transits",
    "#possible",
    "#possibletransit",
    "#possible_transit",
    "#possible-transit",
    "#possibletransits",
    "#candidate",
];
