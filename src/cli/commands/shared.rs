//! Shared components for CLI commands
//!
//! Logging setup, configuration loading, target-list parsing, output
//! plumbing, and the end-of-run summary used by every subcommand.

use crate::app::models::TargetCoord;
use crate::app::services::export::CsvOptions;
use crate::cli::args::CommonArgs;
use crate::config::Config;
use crate::{Error, Result};
use colored::Colorize;
use indicatif::HumanDuration;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Run statistics reported by every subcommand
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of targets (or subjects) processed successfully
    pub processed: usize,

    /// Number of targets that failed
    pub errors: usize,

    /// Wall-clock duration of the run
    pub duration: Duration,

    /// Output files written, with their sizes in bytes
    pub output_files: Vec<(PathBuf, u64)>,
}

impl RunStats {
    /// Print the human-readable end-of-run summary to stderr
    pub fn print_summary(&self, quiet: bool) {
        if quiet {
            return;
        }

        let status = if self.errors == 0 {
            "complete".green().bold()
        } else {
            "complete with errors".yellow().bold()
        };

        eprintln!();
        eprintln!(
            "Run {} in {}: {} processed, {} failed",
            status,
            HumanDuration(self.duration),
            self.processed,
            self.errors
        );
        for (path, size) in &self.output_files {
            eprintln!("  wrote {} ({} bytes)", path.display(), size);
        }
    }
}

/// Set up structured logging based on the common CLI options
pub fn setup_logging(common: &CommonArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = common.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ticmeta={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration from the optional config file
pub fn load_configuration(common: &CommonArgs) -> Result<Config> {
    info!("Loading configuration");

    let mut config = Config::load(common.config_file.as_deref())?;

    if common.header_row {
        config.output.header_row = true;
    }

    Ok(config)
}

/// CSV options implied by the configuration
pub fn csv_options(config: &Config) -> CsvOptions {
    CsvOptions::from_config(&config.output)
}

/// Whether to show a progress bar for this run
pub fn show_progress(common: &CommonArgs) -> bool {
    !common.no_progress && !common.quiet
}

/// Read a `tic|ra|dec` target list
///
/// Lines with only a TIC are accepted (the target just has no
/// coordinates); blank lines are skipped. An empty first cell is a
/// malformed line, since every downstream record is keyed by TIC.
pub fn read_target_list(path: &Path, delimiter: char) -> Result<Vec<TargetCoord>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read target list {}", path.display()), e))?;

    let mut targets = Vec::new();
    for (line_number, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let mut cells = line.split(delimiter);
        let tic = cells.next().unwrap_or_default().trim();
        if tic.is_empty() {
            return Err(Error::input_format(
                path.display().to_string(),
                format!("line {} has an empty TIC field", line_number + 1),
            ));
        }

        let ra = cells.next().unwrap_or_default().trim();
        let dec = cells.next().unwrap_or_default().trim();
        targets.push(TargetCoord::new(tic, ra, dec));
    }

    debug!("Read {} targets from {}", targets.len(), path.display());
    Ok(targets)
}

/// Read a one-value-per-line list (TICs or subject IDs), skipping blanks
pub fn read_line_list(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read input list {}", path.display()), e))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Open the CSV output destination: the given file, or stdout
pub fn output_writer(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = std::fs::File::create(path).map_err(|e| {
                Error::io(format!("Failed to create output file {}", path.display()), e)
            })?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}

/// Write a raw-text dump file and record it in the run stats
pub fn write_raw_dump(path: &Path, dump: &str, stats: &mut RunStats) -> Result<()> {
    std::fs::write(path, dump)
        .map_err(|e| Error::io(format!("Failed to write raw dump {}", path.display()), e))?;
    stats
        .output_files
        .push((path.to_path_buf(), dump.len() as u64));
    info!("Raw dump written to {}", path.display());
    Ok(())
}

/// Record a CSV output file's size in the run stats
pub fn record_output_file(output: Option<&Path>, stats: &mut RunStats) {
    if let Some(path) = output {
        let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        stats.output_files.push((path.to_path_buf(), size));
    }
}
