//! Asas-sn command: variable-star searches for a target list

use super::shared::{
    self, RunStats, csv_options, load_configuration, output_writer, read_target_list,
    setup_logging, show_progress, write_raw_dump,
};
use crate::app::adapters::http::HttpClient;
use crate::app::services::asas_sn;
use crate::app::services::bulk::run_bulk;
use crate::app::services::export::csv_writer::write_asas_sn_csv;
use crate::app::services::export::text_dump::join_labeled_dump;
use crate::cli::args::AsasSnArgs;
use crate::Result;
use std::time::Instant;
use tracing::{debug, info};

/// Search ASAS-SN around every target and write the normalized CSV
pub async fn run_asas_sn(args: AsasSnArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_logging(&args.common)?;
    info!("Starting ASAS-SN search run");
    debug!("Command line arguments: {:?}", args);
    args.validate()?;

    let config = load_configuration(&args.common)?;
    let radius = args.radius_arcmin.unwrap_or(config.fetch.radius_arcmin);
    let client = HttpClient::new(&config.fetch)?;

    let targets = read_target_list(&args.input, config.output.delimiter)?;
    info!("Searching {} targets, radius {} arcmin", targets.len(), radius);

    let outcome = run_bulk(
        &targets,
        |target| target.tic.clone(),
        |target| asas_sn::fetch_meta(&client, target, radius),
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
    write_asas_sn_csv(writer, &metas, csv_options(&config))?;
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
