//! Exofop command: target reports for a TIC list

use super::shared::{
    self, RunStats, csv_options, load_configuration, output_writer, read_line_list, setup_logging,
    show_progress, write_raw_dump,
};
use crate::app::adapters::http::HttpClient;
use crate::app::services::bulk::run_bulk;
use crate::app::services::exofop;
use crate::app::services::export::csv_writer::write_exofop_csv;
use crate::app::services::export::text_dump::join_labeled_dump;
use crate::cli::args::ExofopArgs;
use crate::Result;
use std::time::Instant;
use tracing::{debug, info};

/// Fetch the ExoFOP report for every TIC and write the normalized CSV
pub async fn run_exofop(args: ExofopArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_logging(&args.common)?;
    info!("Starting ExoFOP report run");
    debug!("Command line arguments: {:?}", args);
    args.validate()?;

    let config = load_configuration(&args.common)?;
    let client = HttpClient::new(&config.fetch)?;

    let tics = read_line_list(&args.input)?;
    info!("Fetching reports for {} TICs", tics.len());

    let outcome = run_bulk(
        &tics,
        |tic| tic.clone(),
        |tic| exofop::fetch_meta(&client, tic),
        show_progress(&args.common),
    )
    .await;
    outcome.log_summary();

    let mut stats = RunStats {
        processed: outcome.results.len(),
        errors: outcome.errors.len(),
        ..RunStats::default()
    };

    let metas: Vec<_> = outcome.results.iter().map(|r| r.meta.clone()).collect();
    let writer = output_writer(args.common.output.as_deref())?;
    write_exofop_csv(writer, &metas, csv_options(&config))?;
    shared::record_output_file(args.common.output.as_deref(), &mut stats);

    if let Some(raw_path) = &args.raw_output {
        let dump = join_labeled_dump(
            outcome
                .results
                .iter()
                .map(|r| (r.meta.tic.as_deref().unwrap_or(""), r.raw_text.as_str())),
        );
        write_raw_dump(raw_path, &dump, &mut stats)?;
    }

    stats.duration = start_time.elapsed();
    stats.print_summary(args.common.quiet);
    Ok(stats)
}
