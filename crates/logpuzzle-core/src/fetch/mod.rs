//! Single HTTP GET into memory.
//!
//! Uses the curl crate (libcurl). Redirects are followed; any final status
//! outside 2xx is reported as `FetchError::Http` so the retry layer can
//! classify it.

mod error;

pub use error::FetchError;

use crate::config::LogpuzzleConfig;
use std::time::Duration;

/// Transfer limits applied to every fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    /// Whole-transfer timeout.
    pub timeout: Duration,
    pub max_redirects: u32,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self::from(&LogpuzzleConfig::default())
    }
}

impl From<&LogpuzzleConfig> for FetchOptions {
    fn from(cfg: &LogpuzzleConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            max_redirects: cfg.max_redirects,
        }
    }
}

/// GETs `url` and returns the response body.
pub fn fetch_bytes(url: &str, opts: &FetchOptions) -> Result<Vec<u8>, FetchError> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(opts.max_redirects)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }

    tracing::debug!(url, bytes = body.len(), "fetched");
    Ok(body)
}
