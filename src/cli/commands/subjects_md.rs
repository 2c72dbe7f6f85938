//! Subjects-md command: markdown listing of Zooniverse subjects

use super::shared::{
    self, RunStats, load_configuration, output_writer, read_line_list, setup_logging,
    show_progress,
};
use crate::app::adapters::http::HttpClient;
use crate::app::services::bulk::run_bulk;
use crate::app::services::export::markdown::{SubjectEntry, subject_listing_md};
use crate::app::services::tag_stats;
use crate::cli::args::SubjectsMdArgs;
use crate::{Error, Result};
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Fetch each subject's metadata and render the markdown listing
pub async fn run_subjects_md(args: SubjectsMdArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_logging(&args.common)?;
    info!("Starting subject listing run");
    debug!("Command line arguments: {:?}", args);
    args.validate()?;

    let config = load_configuration(&args.common)?;
    let client = HttpClient::new(&config.fetch)?;

    let subject_ids = parse_subject_ids(&args)?;
    info!("Rendering {} subjects", subject_ids.len());

    let outcome = run_bulk(
        &subject_ids,
        |id| id.to_string(),
        |&id| fetch_entry(&client, id),
        show_progress(&args.common),
    )
    .await;
    outcome.log_summary();

    let entries: Vec<SubjectEntry> = outcome.results.iter().flatten().cloned().collect();

    let mut stats = RunStats {
        processed: entries.len(),
        errors: outcome.errors.len(),
        ..RunStats::default()
    };

    let mut writer = output_writer(args.common.output.as_deref())?;
    writer
        .write_all(subject_listing_md(&entries).as_bytes())
        .map_err(|e| Error::io("Failed to write markdown listing".to_string(), e))?;
    shared::record_output_file(args.common.output.as_deref(), &mut stats);

    stats.duration = start_time.elapsed();
    stats.print_summary(args.common.quiet);
    Ok(stats)
}

async fn fetch_entry(
    client: &HttpClient,
    subject_id: u64,
) -> Result<Option<SubjectEntry>> {
    let Some(info) = tag_stats::subject_info(client, subject_id).await? else {
        warn!("Subject {} not found", subject_id);
        return Ok(None);
    };

    let Some(tic) = info.tic() else {
        warn!("Subject {} has no TIC in its metadata", subject_id);
        return Ok(None);
    };

    Ok(Some(SubjectEntry {
        subject_id,
        tic,
        image_uuid: info.image_uuid(),
    }))
}

fn parse_subject_ids(args: &SubjectsMdArgs) -> Result<Vec<u64>> {
    read_line_list(&args.input)?
        .into_iter()
        .map(|line| {
            line.parse().map_err(|_| {
                Error::input_format(
                    args.input.display().to_string(),
                    format!("'{}' is not a subject ID", line),
                )
            })
        })
        .collect()
}
