//! Sequential image downloader.
//!
//! Fetches each puzzle URL in order and writes its bytes to `img<i>` in the
//! destination directory. The first image that still fails after retries
//! aborts the batch; images already written are left in place.

use crate::config::LogpuzzleConfig;
use crate::fetch::{self, FetchOptions};
use crate::retry::{run_with_retry, RetryPolicy};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A fetched image on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedFile {
    /// Position of the source URL in the ordered list.
    pub index: usize,
    /// Absolute path of `img<index>`.
    pub path: PathBuf,
}

/// Fetch and retry settings for a download batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct DownloadOptions {
    pub fetch: FetchOptions,
    /// `None` = single attempt per image.
    pub retry: Option<RetryPolicy>,
}

impl From<&LogpuzzleConfig> for DownloadOptions {
    fn from(cfg: &LogpuzzleConfig) -> Self {
        Self {
            fetch: FetchOptions::from(cfg),
            retry: Some(RetryPolicy::from(&cfg.retry_config())),
        }
    }
}

/// Local file name for the image at `index`.
pub fn image_file_name(index: usize) -> String {
    format!("img{index}")
}

/// Downloads every URL into `dest_dir` (created with parents if missing).
/// Returns the written files in input order.
pub fn download_images<S: AsRef<str>>(
    urls: &[S],
    dest_dir: &Path,
    opts: &DownloadOptions,
) -> Result<Vec<DownloadedFile>> {
    fs::create_dir_all(dest_dir)
        .with_context(|| format!("failed to create directory {}", dest_dir.display()))?;
    let dir = std::path::absolute(dest_dir)
        .with_context(|| format!("failed to resolve {}", dest_dir.display()))?;

    tracing::info!(count = urls.len(), dir = %dir.display(), "downloading images");

    let mut files = Vec::with_capacity(urls.len());
    for (index, url) in urls.iter().enumerate() {
        let url = url.as_ref();
        let bytes = match &opts.retry {
            Some(policy) => run_with_retry(policy, || fetch::fetch_bytes(url, &opts.fetch)),
            None => fetch::fetch_bytes(url, &opts.fetch),
        }
        .with_context(|| format!("image {index} ({url})"))?;

        let path = dir.join(image_file_name(index));
        fs::write(&path, &bytes)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::debug!(index, url, bytes = bytes.len(), path = %path.display(), "saved image");

        files.push(DownloadedFile { index, path });
    }

    Ok(files)
}
