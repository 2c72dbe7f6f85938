//! Tesseb command: crawl the TESS EB portal and match a TIC list

use super::shared::{
    self, RunStats, csv_options, load_configuration, output_writer, read_line_list, setup_logging,
};
use crate::app::adapters::http::HttpClient;
use crate::app::services::export::csv_writer::write_tesseb_csv;
use crate::app::services::tesseb;
use crate::cli::args::TessebArgs;
use crate::Result;
use std::time::Instant;
use tracing::{debug, info};

/// Crawl the portal listing and mark which input TICs appear in it
pub async fn run_tesseb(args: TessebArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_logging(&args.common)?;
    info!("Starting TESS EB membership run");
    debug!("Command line arguments: {:?}", args);
    args.validate()?;

    let config = load_configuration(&args.common)?;
    let client = HttpClient::new(&config.fetch)?;

    let targets = read_line_list(&args.input)?;
    info!(
        "Crawling portal pages {}..{} for {} targets",
        args.page_start,
        args.page_end,
        targets.len()
    );

    let catalog = tesseb::crawl_tics(&client, args.page_start, args.page_end).await?;
    info!("Crawled {} catalog TICs", catalog.len());

    let memberships = tesseb::match_tics(&targets, &catalog);
    let in_catalog = memberships.iter().filter(|m| m.in_tess_eb).count();
    info!("{} of {} targets are in the catalog", in_catalog, targets.len());

    let mut stats = RunStats {
        processed: memberships.len(),
        ..RunStats::default()
    };

    let writer = output_writer(args.common.output.as_deref())?;
    write_tesseb_csv(writer, &memberships, csv_options(&config))?;
    shared::record_output_file(args.common.output.as_deref(), &mut stats);

    stats.duration = start_time.elapsed();
    stats.print_summary(args.common.quiet);
    Ok(stats)
}
