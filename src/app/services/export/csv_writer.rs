//! Pipe-delimited CSV rendering of harvested metadata
//!
//! Every record type writes a fixed column count in the order given by the
//! column constants; absent values become empty cells rather than dropped
//! columns, so the files line up when pasted side by side in a spreadsheet.

use crate::app::models::{AsasSnMeta, ExofopMeta, SimbadMeta, SubjectTagStats};
use crate::app::services::tesseb::TessEbMembership;
use crate::config::OutputConfig;
use crate::constants::{
    ASAS_SN_CSV_COLUMNS, EXOFOP_CSV_COLUMNS, LIKE_EB_TAG, LIKE_TRANSIT_TAG, SIMBAD_CSV_COLUMNS,
    TAG_STATS_CSV_COLUMNS,
};
use crate::{Error, Result};
use std::io::Write;

/// CSV rendering options, derived from the output configuration
#[derive(Debug, Clone, Copy)]
pub struct CsvOptions {
    /// Field delimiter
    pub delimiter: u8,

    /// Whether to emit a header row before the records
    pub header_row: bool,
}

impl CsvOptions {
    pub fn from_config(config: &OutputConfig) -> Self {
        Self {
            delimiter: config.delimiter as u8,
            header_row: config.header_row,
        }
    }
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: crate::constants::DEFAULT_DELIMITER as u8,
            header_row: false,
        }
    }
}

fn build_writer<W: Write>(out: W, options: CsvOptions) -> csv::Writer<W> {
    // Never quote: alias lists and the tag-count JSON are written verbatim
    // so downstream line-oriented tools (grep, cut) keep working on them
    csv::WriterBuilder::new()
        .delimiter(options.delimiter)
        .quote_style(csv::QuoteStyle::Never)
        .has_headers(false)
        .from_writer(out)
}

fn opt_str(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn opt_f64(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Write SIMBAD records as CSV
pub fn write_simbad_csv<W: Write>(
    out: W,
    metas: &[SimbadMeta],
    options: CsvOptions,
) -> Result<()> {
    let mut writer = build_writer(out, options);
    if options.header_row {
        writer.write_record(SIMBAD_CSV_COLUMNS)?;
    }

    for meta in metas {
        writer.write_record(&[
            opt_str(&meta.tic),
            opt_str(&meta.id),
            opt_str(&meta.object_type),
            opt_f64(meta.mag_b),
            opt_f64(meta.mag_v),
            opt_f64(meta.mag_r),
            opt_f64(meta.angular_distance),
            opt_str(&meta.aliases),
        ])?;
    }

    writer.flush().map_err(Error::from)
}

/// Write ExoFOP records as CSV
pub fn write_exofop_csv<W: Write>(
    out: W,
    metas: &[ExofopMeta],
    options: CsvOptions,
) -> Result<()> {
    let mut writer = build_writer(out, options);
    if options.header_row {
        writer.write_record(EXOFOP_CSV_COLUMNS)?;
    }

    for meta in metas {
        writer.write_record(&[
            opt_str(&meta.tic),
            opt_str(&meta.ra_deg),
            opt_str(&meta.dec_deg),
            opt_str(&meta.ra_sexa),
            opt_str(&meta.dec_sexa),
            opt_f64(meta.mag_b),
            opt_f64(meta.mag_v),
            opt_f64(meta.mag_r),
            opt_f64(meta.mag_tess),
            opt_str(&meta.distance_pc),
            opt_f64(meta.r_sun),
            opt_f64(meta.m_sun),
            opt_f64(meta.t_eff),
            opt_f64(meta.contamination_ratio),
            meta.contamination_sources
                .map(|v| v.to_string())
                .unwrap_or_default(),
            meta.in_ctl.to_string(),
            opt_str(&meta.aliases),
        ])?;
    }

    writer.flush().map_err(Error::from)
}

/// Write ASAS-SN records as CSV
pub fn write_asas_sn_csv<W: Write>(
    out: W,
    metas: &[AsasSnMeta],
    options: CsvOptions,
) -> Result<()> {
    let mut writer = build_writer(out, options);
    if options.header_row {
        writer.write_record(ASAS_SN_CSV_COLUMNS)?;
    }

    for meta in metas {
        writer.write_record(&[
            opt_str(&meta.tic),
            opt_str(&meta.id),
            opt_str(&meta.object_type),
            opt_f64(meta.period),
            opt_f64(meta.mag_v),
            opt_f64(meta.angular_distance),
            opt_str(&meta.id_uuid),
        ])?;
    }

    writer.flush().map_err(Error::from)
}

/// Write TESS EB membership records as CSV
pub fn write_tesseb_csv<W: Write>(
    out: W,
    records: &[TessEbMembership],
    options: CsvOptions,
) -> Result<()> {
    let mut writer = build_writer(out, options);
    if options.header_row {
        writer.write_record(["tic", "inTessEB"])?;
    }

    for record in records {
        writer.write_record(&[record.tic.clone(), record.in_tess_eb.to_string()])?;
    }

    writer.flush().map_err(Error::from)
}

/// Write the eclipsing-binary vs transit tag summary as CSV
///
/// Always emits the header: the summary is a report in its own right, not
/// one slice of a joined table like the metadata CSVs.
pub fn write_tag_stats_csv<W: Write>(
    out: W,
    stats_list: &[SubjectTagStats],
    options: CsvOptions,
) -> Result<()> {
    let mut writer = build_writer(out, options);
    writer.write_record(TAG_STATS_CSV_COLUMNS)?;

    for stats in stats_list {
        let tag_counts_json = serde_json::to_string(&stats.tag_counts)
            .map_err(|e| Error::csv_output(format!("tag counts not serializable: {e}")))?;

        writer.write_record(&[
            stats.subject_id.to_string(),
            stats.count(LIKE_EB_TAG).to_string(),
            stats.count(LIKE_TRANSIT_TAG).to_string(),
            stats.num_comments.to_string(),
            tag_counts_json,
        ])?;
    }

    writer.flush().map_err(Error::from)
}
