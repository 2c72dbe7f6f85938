//! Command implementations for the catalog harvester CLI
//!
//! Each subcommand lives in its own module; `shared` holds the logging
//! setup, configuration loading, input parsing, and summary reporting
//! they all use.

pub mod asas_sn;
pub mod exofop;
pub mod shared;
pub mod simbad;
pub mod subjects_md;
pub mod tag_stats;
pub mod tesseb;

pub use shared::RunStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Dispatch to the subcommand handler selected on the command line
pub async fn run(args: Args) -> Result<RunStats> {
    match args.get_command() {
        Commands::Simbad(simbad_args) => simbad::run_simbad(simbad_args).await,
        Commands::Exofop(exofop_args) => exofop::run_exofop(exofop_args).await,
        Commands::AsasSn(asas_sn_args) => asas_sn::run_asas_sn(asas_sn_args).await,
        Commands::Tesseb(tesseb_args) => tesseb::run_tesseb(tesseb_args).await,
        Commands::TagStats(tag_stats_args) => tag_stats::run_tag_stats(tag_stats_args).await,
        Commands::SubjectsMd(subjects_md_args) => {
            subjects_md::run_subjects_md(subjects_md_args).await
        }
    }
}
