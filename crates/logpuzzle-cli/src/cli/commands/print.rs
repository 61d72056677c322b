//! No `--todir`: print the ordered urls, one per line.

use anyhow::Result;
use logpuzzle_core::order::PuzzleUrls;
use std::io::{self, Write};

pub fn run_print(urls: &PuzzleUrls) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for url in urls {
        writeln!(out, "{url}")?;
    }
    out.flush()?;
    Ok(())
}
