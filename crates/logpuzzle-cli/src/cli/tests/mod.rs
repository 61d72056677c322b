//! CLI parse and run tests.

use super::Cli;
use clap::Parser;
use logpuzzle_core::config::LogpuzzleConfig;
use logpuzzle_core::order::SortMode;
use std::path::Path;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_logfile_only() {
    let cli = parse(&["logpuzzle", "animal_code.google.com"]);
    assert_eq!(cli.logfile, Path::new("animal_code.google.com"));
    assert!(cli.todir.is_none());
    assert!(cli.sort.is_none());
    assert!(!cli.no_retry);
}

#[test]
fn cli_parse_todir_short() {
    let cli = parse(&["logpuzzle", "-d", "out", "animal_code.google.com"]);
    assert_eq!(cli.todir.as_deref(), Some(Path::new("out")));
}

#[test]
fn cli_parse_todir_long() {
    let cli = parse(&["logpuzzle", "animal_code.google.com", "--todir", "/tmp/out"]);
    assert_eq!(cli.todir.as_deref(), Some(Path::new("/tmp/out")));
}

#[test]
fn cli_parse_sort_and_no_retry() {
    let cli = parse(&[
        "logpuzzle",
        "--sort",
        "lexicographic",
        "--no-retry",
        "place_code.google.com",
    ]);
    assert_eq!(cli.sort, Some(SortMode::Lexicographic));
    assert!(cli.no_retry);
}

#[test]
fn cli_rejects_unknown_sort_mode() {
    assert!(Cli::try_parse_from(["logpuzzle", "--sort", "random", "x_y"]).is_err());
}

#[test]
fn cli_requires_logfile() {
    assert!(Cli::try_parse_from(["logpuzzle", "-d", "out"]).is_err());
}

#[test]
fn cli_usage_and_help() {
    use clap::CommandFactory;
    let usage = Cli::command().render_usage().to_string();
    assert!(usage.contains("LOGFILE"));
    let help = Cli::command().render_help().to_string();
    assert!(help.contains("--todir"));
    assert!(help.contains("-d"));
}

#[test]
fn run_with_no_matches_writes_empty_index() {
    let tmp = tempfile::tempdir().unwrap();
    let log = tmp.path().join("animal_code.google.com");
    std::fs::write(&log, "1.2.3.4 - - \"GET /index.html HTTP/1.0\" 200 10\n").unwrap();
    let out = tmp.path().join("out");

    let cli = parse(&[
        "logpuzzle",
        "--todir",
        out.to_str().unwrap(),
        log.to_str().unwrap(),
    ]);
    cli.run(&LogpuzzleConfig::default()).unwrap();

    let html = std::fs::read_to_string(out.join("index.html")).unwrap();
    assert_eq!(html.matches("<img").count(), 0);
}

#[test]
fn run_fails_without_host_in_file_name() {
    let tmp = tempfile::tempdir().unwrap();
    let log = tmp.path().join("access.log");
    std::fs::write(&log, "").unwrap();

    let cli = parse(&["logpuzzle", log.to_str().unwrap()]);
    let err = cli.run(&LogpuzzleConfig::default()).unwrap_err();
    assert!(format!("{err:#}").contains("cannot derive host"));
}
