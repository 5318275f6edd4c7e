//! Unit tests for CLI argument parsing and validation

use clap::Parser;
use statdiff::cli::Cli;
use std::path::PathBuf;

#[test]
fn test_cli_positional_snapshots() {
    let cli = Cli::try_parse_from(["statdiff", "stats_20240601.txt", "stats_20240610.txt"]).unwrap();
    assert_eq!(cli.old_snapshot, PathBuf::from("stats_20240601.txt"));
    assert_eq!(cli.new_snapshot, PathBuf::from("stats_20240610.txt"));
    assert!(cli.output.is_none());
    assert!(!cli.sort_desc);
    assert!(!cli.verbose);
}

#[test]
fn test_cli_with_options() {
    let cli = Cli::try_parse_from([
        "statdiff",
        "stats_20240601.txt",
        "stats_20240610.txt",
        "-o",
        "combined.txt",
        "--sort-desc",
        "--verbose",
    ])
    .unwrap();
    assert_eq!(cli.output, Some(PathBuf::from("combined.txt")));
    assert!(cli.sort_desc);
    assert!(cli.verbose);
}

#[test]
fn test_cli_long_output_flag() {
    let cli = Cli::try_parse_from([
        "statdiff",
        "a_20240601.txt",
        "b_20240610.txt",
        "--output",
        "out.txt",
    ])
    .unwrap();
    assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
}

#[test]
fn test_cli_requires_both_snapshots() {
    assert!(Cli::try_parse_from(["statdiff"]).is_err());
    assert!(Cli::try_parse_from(["statdiff", "only_one_20240601.txt"]).is_err());
}

#[test]
fn test_cli_version_flag() {
    let err = Cli::try_parse_from(["statdiff", "--version"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
}
