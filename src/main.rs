//! Main entry point for statdiff CLI

use clap::Parser;
use statdiff::cli::Cli;
use statdiff::commands;

fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    // Execute the diff pipeline
    if let Err(e) = commands::run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
