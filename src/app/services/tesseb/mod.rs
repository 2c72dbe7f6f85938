//! TESS EB portal crawling
//!
//! The portal has no per-target lookup, so membership is determined the
//! other way round: crawl every listing page once, collect the full TIC
//! set, then match the input targets against it locally.

#[cfg(test)]
mod tests;

use crate::Result;
use crate::app::adapters::http::HttpClient;
use crate::constants::TESSEB_PORTAL_URL;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::collections::HashSet;
use tracing::debug;

static TIC_CELL: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table tbody tr td:nth-of-type(2)").expect("tic cell selector"));

/// One target's membership in the TESS EB catalog
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TessEbMembership {
    pub tic: String,
    pub in_tess_eb: bool,
}

/// Build the listing URL for one page, sorted by TIC for stable crawls
pub fn page_url(page: u32) -> String {
    format!(
        "{}?page={}&order_by=tic__tess_id&order=asc",
        TESSEB_PORTAL_URL, page
    )
}

/// Extract the TIC numbers from one listing page
///
/// The portal zero-pads TICs to a fixed width in its table; the padding
/// is stripped so the numbers compare equal to plain input TICs. A page
/// past the end of the listing simply yields no rows.
pub fn parse_listing_page(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .select(&TIC_CELL)
        .map(|cell| {
            let text = cell.text().collect::<String>();
            let trimmed = text.trim();
            let stripped = trimmed.trim_start_matches('0');
            if stripped.is_empty() && !trimmed.is_empty() {
                "0".to_string()
            } else {
                stripped.to_string()
            }
        })
        .filter(|tic| !tic.is_empty())
        .collect()
}

/// Crawl listing pages `page_start..page_end` and collect every TIC
pub async fn crawl_tics(
    client: &HttpClient,
    page_start: u32,
    page_end: u32,
) -> Result<Vec<String>> {
    let mut tics = Vec::new();
    for page in page_start..page_end {
        debug!("Page {}", page);
        let text = client.fetch_text(&page_url(page)).await?;
        tics.extend(parse_listing_page(&text));
    }
    Ok(tics)
}

/// Match input targets against the crawled TIC set
pub fn match_tics(targets: &[String], catalog: &[String]) -> Vec<TessEbMembership> {
    let catalog: HashSet<&str> = catalog.iter().map(String::as_str).collect();

    targets
        .iter()
        .map(|tic| TessEbMembership {
            tic: tic.clone(),
            in_tess_eb: catalog.contains(tic.as_str()),
        })
        .collect()
}
