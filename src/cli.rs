//! Command-line interface for statdiff

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "statdiff")]
#[command(about = "A snapshot delta tool for date-stamped video statistics exports")]
#[command(version)]
pub struct Cli {
    /// Path to one snapshot file (date-stamped filename, e.g. stats_20240601.txt)
    pub old_snapshot: PathBuf,

    /// Path to the other snapshot file
    pub new_snapshot: PathBuf,

    /// Write the combined table to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Sort the output by the view counter, descending
    #[arg(long)]
    pub sort_desc: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,
}
