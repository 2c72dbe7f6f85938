//! ASAS-SN variable-star search scraping
//!
//! ASAS-SN has no report API, so the coordinate search results page is
//! scraped directly. Results come back sorted by angular distance; only
//! the nearest match (the first table row) is consulted. The `.table-panel`
//! HTML fragment is kept as the raw text for dump files, since the full
//! page is mostly boilerplate.

#[cfg(test)]
mod tests;

use crate::app::adapters::http::HttpClient;
use crate::app::models::{AsasSnMeta, FetchedRecord, TargetCoord};
use crate::app::services::simbad::diagnostic_excerpt;
use crate::constants::ASAS_SN_VARIABLES_URL;
use crate::{Error, Result};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::warn;

static TABLE_PANEL: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".table-panel").expect("table panel selector"));

static RESULT_ROW: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".table-panel table > tbody > tr").expect("result row selector"));

static CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td").expect("cell selector"));

static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").expect("anchor selector"));

/// Build the coordinate search URL
///
/// The empty filter parameters are deliberate: the search form submits
/// them all, and leaving them out changes the defaults server-side.
pub fn search_url(target: &TargetCoord, radius_arcmin: f64) -> Result<String> {
    let url = format!(
        "{base}?ra={ra}&dec={dec}&radius={radius}\
         &vmag_min=&vmag_max=&amplitude_min=&amplitude_max=&period_min=&period_max=\
         &lksl_min=&lksl_max=&class_prob_min=&class_prob_max=\
         &parallax_over_err_min=&parallax_over_err_max=&name=\
         &references[]=I&references[]=II&references[]=III&references[]=IV&references[]=V&references[]=VI\
         &sort_by=distance&sort_order=asc\
         &show_non_periodic=true&show_without_class=true&asassn_discov_only=false&",
        base = ASAS_SN_VARIABLES_URL,
        ra = target.ra,
        dec = target.dec,
        radius = radius_arcmin,
    );
    url::Url::parse(&url).map_err(|e| Error::url(&url, e))?;
    Ok(url)
}

/// Parse a search results page
///
/// Returns the nearest match (or `None` when the search found nothing)
/// together with the `.table-panel` HTML fragment for the raw-text dump.
/// Total over arbitrary input: an unexpected page shape is a `None` match
/// with whatever fragment could be located.
pub fn parse_search_page(html: &str) -> (Option<AsasSnMeta>, String) {
    let document = Html::parse_document(html);

    let fragment = document
        .select(&TABLE_PANEL)
        .next()
        .map(|panel| panel.html())
        .unwrap_or_default();

    let Some(row) = document.select(&RESULT_ROW).next() else {
        return (None, fragment);
    };
    let cells: Vec<ElementRef> = row.select(&CELL).collect();

    let meta = AsasSnMeta {
        tic: None,
        id: cell_text(&cells, 1),
        id_uuid: cells
            .first()
            .and_then(|cell| cell.select(&ANCHOR).next())
            .and_then(|anchor| anchor.attr("href"))
            .and_then(detail_page_uuid),
        angular_distance: cell_f64(&cells, 5),
        mag_v: cell_f64(&cells, 6),
        period: cell_period(&cells),
        object_type: cell_text(&cells, 9),
    };

    (Some(meta), fragment)
}

/// Fetch and parse the nearest ASAS-SN variable for one target
///
/// Requires coordinates; a parse miss degrades to an empty record with a
/// warning rather than an error, so bulk runs continue.
pub async fn fetch_meta(
    client: &HttpClient,
    target: &TargetCoord,
    radius_arcmin: f64,
) -> Result<FetchedRecord<AsasSnMeta>> {
    if !target.has_coordinates() {
        return Err(Error::input_format(
            format!("TIC {}", target.tic),
            "ASAS-SN lookup requires both RA and Dec",
        ));
    }

    let url = search_url(target, radius_arcmin)?;
    let text = client.fetch_text(&url).await?;

    let (parsed, fragment) = parse_search_page(&text);
    let meta = match parsed {
        Some(mut meta) => {
            meta.tic = Some(target.tic.clone());
            meta
        }
        None => {
            warn!(
                "No ASAS-SN match for TIC {}. Page starts with: {}",
                target.tic,
                diagnostic_excerpt(&text)
            );
            AsasSnMeta::empty_for(&target.tic)
        }
    };

    Ok(FetchedRecord {
        meta,
        raw_text: fragment,
    })
}

/// Text content of the 1-based `index`th cell, trimmed; empty cells are `None`
fn cell_text(cells: &[ElementRef], index: usize) -> Option<String> {
    let cell = cells.get(index.checked_sub(1)?)?;
    let text = cell.text().collect::<String>().trim().to_string();
    if text.is_empty() { None } else { Some(text) }
}

fn cell_f64(cells: &[ElementRef], index: usize) -> Option<f64> {
    cell_text(cells, index)?.parse().ok()
}

/// Period from the 8th cell; the literal `NON PERIODIC` encodes as -1.0
fn cell_period(cells: &[ElementRef]) -> Option<f64> {
    let text = cell_text(cells, 8)?;
    Some(text.parse().unwrap_or(-1.0))
}

/// Detail-page UUID from an `/variables/<uuid>` href
fn detail_page_uuid(href: &str) -> Option<String> {
    let (_, uuid) = href.rsplit_once("/variables/")?;
    if uuid.is_empty() {
        None
    } else {
        Some(uuid.to_string())
    }
}
