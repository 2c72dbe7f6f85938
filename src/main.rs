use clap::Parser;
use std::process;
use ticmeta::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic with signal handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            _ = tokio::signal::ctrl_c() => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(ticmeta::Error::processing_interrupted(
                    "Run interrupted by user".to_string(),
                ))
            }
        }
    });

    match result {
        Ok(_stats) => {
            // Success - the summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("ticmeta - TESS Target Metadata Harvester");
    println!("========================================");
    println!();
    println!("Fetch per-target metadata for TESS Input Catalog (TIC) targets from");
    println!("community astronomy catalogs and normalize it into pipe-delimited CSV.");
    println!();
    println!("USAGE:");
    println!("    ticmeta <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    simbad       Look up targets in SIMBAD by coordinate");
    println!("    exofop       Fetch ExoFOP target reports by TIC");
    println!("    asas-sn      Search ASAS-SN variables by coordinate");
    println!("    tesseb       Crawl the TESS EB portal and match targets against it");
    println!("    tag-stats    Aggregate Zooniverse talk tag statistics");
    println!("    subjects-md  Render a markdown listing of Zooniverse subjects");
    println!("    help         Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Look up a target list in SIMBAD, writing CSV and a raw dump:");
    println!("    ticmeta simbad --input targets.csv --output simbad.csv \\");
    println!("                   --raw-output simbad_raw.txt");
    println!();
    println!("    # Fetch ExoFOP reports for a plain TIC list:");
    println!("    ticmeta exofop --input tics.txt --output exofop.csv");
    println!();
    println!("    # Summarize eclipsing-binary tagging on popular talk subjects:");
    println!("    ticmeta tag-stats --tag eclipsingbinary --pages 11,31 -o tags.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    ticmeta <COMMAND> --help");
}
