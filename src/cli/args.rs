//! Command-line argument definitions for the catalog harvester
//!
//! One subcommand per upstream source, sharing a common set of I/O and
//! logging options. Validation that needs the filesystem lives in the
//! per-subcommand `validate()` methods rather than in clap itself.

use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the TIC metadata harvester
///
/// Harvests per-target metadata from community astronomy catalogs and
/// normalizes it into pipe-delimited CSV for local cross-matching.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ticmeta",
    version,
    about = "Harvest TESS target metadata from community astronomy catalogs",
    long_about = "Fetches per-target metadata for TESS Input Catalog (TIC) targets from \
                  ExoFOP, SIMBAD, ASAS-SN, the TESS EB portal, and Zooniverse Planet \
                  Hunters talk boards, and normalizes everything into pipe-delimited CSV \
                  plus searchable raw-text dumps for offline cross-matching."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands, one per upstream catalog
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Look up targets in SIMBAD by coordinate
    Simbad(SimbadArgs),
    /// Fetch ExoFOP target reports by TIC
    Exofop(ExofopArgs),
    /// Search ASAS-SN variables by coordinate
    AsasSn(AsasSnArgs),
    /// Crawl the TESS EB portal and match targets against it
    Tesseb(TessebArgs),
    /// Aggregate Zooniverse talk tag statistics
    TagStats(TagStatsArgs),
    /// Render a markdown listing of Zooniverse subjects
    SubjectsMd(SubjectsMdArgs),
}

/// Options shared by every subcommand
#[derive(Debug, Clone, Parser)]
pub struct CommonArgs {
    /// Output file for the CSV result
    ///
    /// If not specified, the CSV is written to stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file for CSV results (default: stdout)"
    )]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Emit a CSV header row before the data rows
    #[arg(long = "header", help = "Emit a CSV header row")]
    pub header_row: bool,

    /// Disable the progress bar
    #[arg(long = "no-progress", help = "Disable progress reporting")]
    pub no_progress: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl CommonArgs {
    /// Tracing level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Validate the options that need the filesystem
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }
        Ok(())
    }
}

/// Arguments for the simbad command
#[derive(Debug, Clone, Parser)]
pub struct SimbadArgs {
    /// Input target list: one `tic|ra|dec` line per target
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Target list file (tic|ra|dec per line)"
    )]
    pub input: PathBuf,

    /// Search radius around each coordinate, in arcminutes
    #[arg(
        short = 'r',
        long = "radius",
        value_name = "ARCMIN",
        help = "Search radius in arcminutes (overrides config)"
    )]
    pub radius_arcmin: Option<f64>,

    /// File for the raw response dump
    #[arg(
        long = "raw-output",
        value_name = "FILE",
        help = "Also write the raw catalog responses to this file"
    )]
    pub raw_output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl SimbadArgs {
    pub fn validate(&self) -> Result<()> {
        validate_input_file(&self.input)?;
        validate_radius(self.radius_arcmin)?;
        self.common.validate()
    }
}

/// Arguments for the exofop command
#[derive(Debug, Clone, Parser)]
pub struct ExofopArgs {
    /// Input TIC list: one TIC number per line
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "TIC list file (one TIC per line)"
    )]
    pub input: PathBuf,

    /// File for the raw report dump
    #[arg(
        long = "raw-output",
        value_name = "FILE",
        help = "Also write the raw target reports to this file"
    )]
    pub raw_output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl ExofopArgs {
    pub fn validate(&self) -> Result<()> {
        validate_input_file(&self.input)?;
        self.common.validate()
    }
}

/// Arguments for the asas-sn command
#[derive(Debug, Clone, Parser)]
pub struct AsasSnArgs {
    /// Input target list: one `tic|ra|dec` line per target
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Target list file (tic|ra|dec per line)"
    )]
    pub input: PathBuf,

    /// Search radius around each coordinate, in arcminutes
    #[arg(
        short = 'r',
        long = "radius",
        value_name = "ARCMIN",
        help = "Search radius in arcminutes (overrides config)"
    )]
    pub radius_arcmin: Option<f64>,

    /// File for the raw HTML fragment dump
    #[arg(
        long = "raw-output",
        value_name = "FILE",
        help = "Also write the result-table HTML fragments to this file"
    )]
    pub raw_output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl AsasSnArgs {
    pub fn validate(&self) -> Result<()> {
        validate_input_file(&self.input)?;
        validate_radius(self.radius_arcmin)?;
        self.common.validate()
    }
}

/// Arguments for the tesseb command
#[derive(Debug, Clone, Parser)]
pub struct TessebArgs {
    /// Input TIC list: one TIC number per line
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "TIC list file (one TIC per line)"
    )]
    pub input: PathBuf,

    /// First portal listing page to crawl
    #[arg(
        long = "page-start",
        value_name = "PAGE",
        default_value_t = 1,
        help = "First listing page to crawl"
    )]
    pub page_start: u32,

    /// One past the last listing page to crawl
    #[arg(
        long = "page-end",
        value_name = "PAGE",
        default_value_t = 41,
        help = "One past the last listing page to crawl"
    )]
    pub page_end: u32,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl TessebArgs {
    pub fn validate(&self) -> Result<()> {
        validate_input_file(&self.input)?;
        if self.page_start == 0 || self.page_start >= self.page_end {
            return Err(Error::configuration(
                "Page range must satisfy 1 <= page-start < page-end".to_string(),
            ));
        }
        self.common.validate()
    }
}

/// Arguments for the tag-stats command
#[derive(Debug, Clone, Parser)]
pub struct TagStatsArgs {
    /// Hashtag whose popular subjects are crawled (without the `#`)
    #[arg(
        short = 't',
        long = "tag",
        value_name = "TAG",
        default_value = "eclipsingbinary",
        help = "Hashtag whose popular subjects are crawled"
    )]
    pub tag: String,

    /// Popular-tag page ranges to crawl, as start,end pairs
    ///
    /// Each pair is start,end-exclusive; multiple pairs sample distinct
    /// stretches of the popularity ranking.
    #[arg(
        short = 'p',
        long = "pages",
        value_name = "RANGES",
        default_value = "1,2",
        help = "Page ranges as comma-separated start,end pairs (e.g. 11,31,311,331)"
    )]
    pub pages: PageRangeList,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl TagStatsArgs {
    pub fn validate(&self) -> Result<()> {
        if self.tag.is_empty() {
            return Err(Error::configuration("Tag cannot be empty".to_string()));
        }
        self.common.validate()
    }
}

/// Arguments for the subjects-md command
#[derive(Debug, Clone, Parser)]
pub struct SubjectsMdArgs {
    /// Input subject list: one Zooniverse subject ID per line
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Subject list file (one subject ID per line)"
    )]
    pub input: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl SubjectsMdArgs {
    pub fn validate(&self) -> Result<()> {
        validate_input_file(&self.input)?;
        self.common.validate()
    }
}

/// Wrapper for parsing comma-separated page-range boundary lists
#[derive(Debug, Clone)]
pub struct PageRangeList {
    pub boundaries: Vec<u32>,
}

impl FromStr for PageRangeList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let boundaries: Vec<u32> = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse().map_err(|_| {
                    Error::configuration(format!("Invalid page number '{}'", part))
                })
            })
            .collect::<Result<_>>()?;

        if boundaries.is_empty() || boundaries.len() % 2 != 0 {
            return Err(Error::configuration(
                "Page ranges must be comma-separated start,end pairs".to_string(),
            ));
        }

        for pair in boundaries.chunks(2) {
            if pair[0] >= pair[1] {
                return Err(Error::configuration(format!(
                    "Page range {},{} is empty (end is exclusive)",
                    pair[0], pair[1]
                )));
            }
        }

        Ok(PageRangeList { boundaries })
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

fn validate_input_file(path: &PathBuf) -> Result<()> {
    if !path.exists() {
        return Err(Error::configuration(format!(
            "Input file does not exist: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(Error::configuration(format!(
            "Input path is not a file: {}",
            path.display()
        )));
    }
    Ok(())
}

fn validate_radius(radius: Option<f64>) -> Result<()> {
    if let Some(radius) = radius {
        if radius <= 0.0 || radius > 60.0 {
            return Err(Error::configuration(
                "Search radius must be between 0 and 60 arcminutes".to_string(),
            ));
        }
    }
    Ok(())
}
