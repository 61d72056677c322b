//! `--todir DIR`: download every image and write the index page.

use anyhow::Result;
use logpuzzle_core::config::LogpuzzleConfig;
use logpuzzle_core::downloader::{self, DownloadOptions};
use logpuzzle_core::order::PuzzleUrls;
use logpuzzle_core::page;
use std::path::{Path, PathBuf};

pub fn run_download(
    urls: &PuzzleUrls,
    dest_dir: &Path,
    cfg: &LogpuzzleConfig,
    no_retry: bool,
) -> Result<()> {
    let mut opts = DownloadOptions::from(cfg);
    if no_retry {
        opts.retry = None;
    }

    let files = downloader::download_images(urls.as_slice(), dest_dir, &opts)?;
    let paths: Vec<PathBuf> = files.into_iter().map(|f| f.path).collect();
    let index = page::write_index(dest_dir, &paths)?;
    println!("Wrote {} image(s) and {}", paths.len(), index.display());
    Ok(())
}
