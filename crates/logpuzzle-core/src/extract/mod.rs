//! Puzzle URL extraction from Apache access logs.
//!
//! The host serving the puzzle images is not in the log itself; it is encoded
//! in the log's file name after the last underscore (`animal_code.google.com`).
//! Each log line that requests a path containing `/puzzle/` contributes one URL.

mod error;
mod host;

pub use error::ExtractError;
pub use host::host_from_log_path;

use crate::order::{self, PuzzleUrls, SortMode};
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

static PUZZLE_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+/puzzle/\S+").unwrap());

/// Returns the first whitespace-free token in `line` that contains `/puzzle/`.
pub fn puzzle_path(line: &str) -> Option<&str> {
    PUZZLE_PATH_REGEX.find(line).map(|m| m.as_str())
}

/// Scans the log at `path` and returns every puzzle URL in file order,
/// duplicates included.
pub fn extract_urls(path: &Path, scheme: &str) -> Result<Vec<String>, ExtractError> {
    let host = host_from_log_path(path, scheme)?;
    let file = File::open(path).map_err(|source| ExtractError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    let mut urls = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0usize;
    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| ExtractError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        if n == 0 {
            break;
        }
        line_no += 1;
        // Access logs carry arbitrary client bytes (user agents, referers).
        let line = String::from_utf8_lossy(&buf);
        if let Some(token) = puzzle_path(&line) {
            urls.push(format!("{host}{token}"));
        }
    }

    tracing::debug!(
        path = %path.display(),
        lines = line_no,
        matches = urls.len(),
        "scanned log"
    );
    Ok(urls)
}

/// Extracts, deduplicates and orders the puzzle URLs of the log at `path`.
pub fn read_urls(path: &Path, scheme: &str, mode: SortMode) -> Result<PuzzleUrls, ExtractError> {
    let urls = extract_urls(path, scheme)?;
    Ok(order::order_urls(urls, mode))
}
