//! Sequential bulk fetch driver
//!
//! Catalog endpoints are shared community services, so bulk runs fetch one
//! target at a time rather than hammering them concurrently. A failure on
//! one target is recorded and the run continues; the caller gets every
//! result and every error back in one outcome rather than global state.

use crate::Error;
use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use tracing::{debug, info, warn};

/// Everything a bulk run produced
///
/// `results` holds the successful fetches in input order; `errors` pairs
/// each failed target's label with what went wrong.
#[derive(Debug)]
pub struct BulkOutcome<T> {
    pub results: Vec<T>,
    pub errors: Vec<(String, Error)>,
}

impl<T> BulkOutcome<T> {
    /// Whether every target was fetched successfully
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    /// Log the standard end-of-run summary
    pub fn log_summary(&self) {
        info!("Num processed: {}", self.results.len());
        info!("Num errors:    {}", self.errors.len());
        for (label, error) in &self.errors {
            warn!("  {}: {}", label, error);
        }
    }
}

/// Run `fetch` over every item, collecting results and errors
///
/// `label` names an item for progress and error reporting (typically its
/// TIC). The run never aborts early: an error on one item is recorded in
/// the outcome and the next item proceeds.
pub async fn run_bulk<'a, I, T, L, F, Fut>(
    items: &'a [I],
    label: L,
    fetch: F,
    show_progress: bool,
) -> BulkOutcome<T>
where
    L: Fn(&'a I) -> String,
    F: Fn(&'a I) -> Fut,
    Fut: Future<Output = crate::Result<T>>,
{
    let progress_bar = if show_progress {
        let pb = ProgressBar::new(items.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut outcome = BulkOutcome {
        results: Vec::with_capacity(items.len()),
        errors: Vec::new(),
    };

    for item in items {
        let name = label(item);
        debug!("Processing {}", name);
        if let Some(pb) = &progress_bar {
            pb.set_message(name.clone());
        }

        match fetch(item).await {
            Ok(result) => outcome.results.push(result),
            Err(error) => {
                warn!("Failed to process {}: {}", name, error);
                outcome.errors.push((name, error));
            }
        }

        if let Some(pb) = &progress_bar {
            pb.inc(1);
        }
    }

    if let Some(pb) = &progress_bar {
        pb.finish_with_message("done");
    }

    outcome
}
