//! CLI for logpuzzle.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use logpuzzle_core::config::{self, LogpuzzleConfig};
use logpuzzle_core::extract;
use logpuzzle_core::order::SortMode;
use std::path::PathBuf;

use commands::{run_download, run_print};

/// Find puzzle image URLs in an Apache access log, print them in order or
/// download them into a directory with an index.html viewer.
#[derive(Debug, Parser)]
#[command(name = "logpuzzle")]
#[command(about = "Extract and download puzzle images from an Apache access log", long_about = None)]
pub struct Cli {
    /// Apache log file to extract urls from; the host is taken from the file
    /// name after the last underscore (e.g. animal_code.google.com).
    pub logfile: PathBuf,

    /// Destination directory for downloaded images.
    #[arg(short = 'd', long = "todir", value_name = "DIR")]
    pub todir: Option<PathBuf>,

    /// Ordering of the urls (default from config: auto).
    #[arg(long, value_name = "MODE", value_parser = parse_sort_mode)]
    pub sort: Option<SortMode>,

    /// Fetch each image once, without retry.
    #[arg(long)]
    pub no_retry: bool,
}

fn parse_sort_mode(s: &str) -> Result<SortMode, String> {
    s.parse()
}

/// Print usage to stderr and exit with status 1.
pub fn exit_with_usage() -> ! {
    eprintln!("{}", Cli::command().render_usage());
    std::process::exit(1);
}

fn load_config() -> LogpuzzleConfig {
    match config::load_or_init() {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::warn!("using default config: {:#}", err);
            LogpuzzleConfig::default()
        }
    }
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config();
        tracing::debug!("loaded config: {:?}", cfg);
        cli.run(&cfg)
    }

    pub fn run(&self, cfg: &LogpuzzleConfig) -> Result<()> {
        let mode = self.sort.unwrap_or(cfg.sort_mode);
        let urls = extract::read_urls(&self.logfile, &cfg.scheme, mode)?;
        tracing::info!(
            log = %self.logfile.display(),
            count = urls.len(),
            ordering = ?urls.ordering(),
            "extracted puzzle urls"
        );
        if urls.is_empty() {
            tracing::warn!("no puzzle urls found in {}", self.logfile.display());
        }

        match &self.todir {
            Some(dir) => run_download(&urls, dir, cfg, self.no_retry),
            None => run_print(&urls),
        }
    }
}

#[cfg(test)]
mod tests;
