//! Tests for CLI subcommand parsing.

use clap::Parser;
use phone_locator::config::{Cli, Command, LogFormat, LogLevel};
use phone_locator::export::ExportFormat;
use phone_locator::MapStyle;
use std::path::PathBuf;

#[test]
fn test_lookup_defaults() {
    let cli = Cli::try_parse_from(["phone_locator", "lookup", "+14155552671"]).unwrap();
    assert!(matches!(cli.log_level, LogLevel::Info));
    assert!(matches!(cli.log_format, LogFormat::Plain));
    assert_eq!(cli.cache_path, PathBuf::from("geocode_cache.json"));

    let Command::Lookup(args) = cli.command else {
        panic!("expected lookup");
    };
    assert_eq!(args.number, "+14155552671");
    assert_eq!(args.options.map_style, MapStyle::Standard);
    assert!(!args.options.include_ip);
    assert!(!args.options.no_map);
    assert!(!args.options.no_export);
}

#[test]
fn test_lookup_flags() {
    let cli = Cli::try_parse_from([
        "phone_locator",
        "lookup",
        "+442071838750",
        "--map-style",
        "terrain",
        "--include-ip",
        "--no-map",
        "--log-level",
        "debug",
    ])
    .unwrap();
    assert!(matches!(cli.log_level, LogLevel::Debug));

    let Command::Lookup(args) = cli.command else {
        panic!("expected lookup");
    };
    let options = args.options.lookup_options();
    assert_eq!(options.map_style, MapStyle::Terrain);
    assert!(options.include_ip);
    assert!(args.options.no_map);
}

#[test]
fn test_lookup_requires_number() {
    assert!(Cli::try_parse_from(["phone_locator", "lookup"]).is_err());
}

#[test]
fn test_unknown_map_style_rejected() {
    assert!(Cli::try_parse_from([
        "phone_locator",
        "lookup",
        "+14155552671",
        "--map-style",
        "watercolor"
    ])
    .is_err());
}

#[test]
fn test_history_filter() {
    let cli = Cli::try_parse_from(["phone_locator", "history", "--filter", "france"]).unwrap();
    let Command::History(args) = cli.command else {
        panic!("expected history");
    };
    assert_eq!(args.filter, "france");
}

#[test]
fn test_export_defaults() {
    let cli = Cli::try_parse_from(["phone_locator", "export"]).unwrap();
    let config = cli.config();
    let Command::Export(args) = cli.command else {
        panic!("expected export");
    };
    let opts = args.options(&config.history_export_path);
    assert_eq!(opts.output, Some(PathBuf::from("full_history.csv")));
    assert_eq!(opts.format, ExportFormat::Csv);
}

#[test]
fn test_global_paths_after_subcommand() {
    let cli = Cli::try_parse_from([
        "phone_locator",
        "clear-history",
        "--history-path",
        "/tmp/h.json",
    ])
    .unwrap();
    assert!(matches!(cli.command, Command::ClearHistory));
    assert_eq!(cli.config().history_path, PathBuf::from("/tmp/h.json"));
}

#[test]
fn test_history_map_output() {
    let cli = Cli::try_parse_from(["phone_locator", "history-map", "--output", "all.html"]).unwrap();
    let Command::HistoryMap(args) = cli.command else {
        panic!("expected history-map");
    };
    assert_eq!(args.output, Some(PathBuf::from("all.html")));
}

#[test]
fn test_history_map_defaults_to_config_path() {
    let cli = Cli::try_parse_from(["phone_locator", "history-map"]).unwrap();
    assert_eq!(cli.config().history_map_path, PathBuf::from("history_map.html"));
    let Command::HistoryMap(args) = cli.command else {
        panic!("expected history-map");
    };
    assert!(args.output.is_none());
}
