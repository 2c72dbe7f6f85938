//! Tag-stats command: aggregate talk tagging for popular subjects

use super::shared::{
    self, RunStats, csv_options, load_configuration, output_writer, setup_logging,
};
use crate::app::adapters::http::HttpClient;
use crate::app::services::export::csv_writer::write_tag_stats_csv;
use crate::app::services::tag_stats;
use crate::cli::args::TagStatsArgs;
use crate::Result;
use std::time::Instant;
use tracing::{debug, info};

/// Crawl the popular-subject pages for a tag and write the summary CSV
pub async fn run_tag_stats(args: TagStatsArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_logging(&args.common)?;
    info!("Starting tag statistics run");
    debug!("Command line arguments: {:?}", args);
    args.validate()?;

    let config = load_configuration(&args.common)?;
    let client = HttpClient::new(&config.fetch)?;
    let section = &config.zooniverse.section;

    let pages = tag_stats::page_ranges(&args.pages.boundaries)?;
    info!(
        "Crawling {} popular-tag pages for '{}' in section {}",
        pages.len(),
        args.tag,
        section
    );

    let stats_list = tag_stats::tag_stats_of_pages(&client, section, &args.tag, &pages).await?;
    info!("Aggregated {} subjects", stats_list.len());

    let mut stats = RunStats {
        processed: stats_list.len(),
        ..RunStats::default()
    };

    let writer = output_writer(args.common.output.as_deref())?;
    write_tag_stats_csv(writer, &stats_list, csv_options(&config))?;
    shared::record_output_file(args.common.output.as_deref(), &mut stats);

    stats.duration = start_time.elapsed();
    stats.print_summary(args.common.quiet);
    Ok(stats)
}
