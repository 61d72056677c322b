//! Deduplication and ordering of extracted puzzle URLs.
//!
//! Puzzle images either sort by their full URL, or (for the `-word-word.jpg`
//! naming convention) by the second word of the file name. The choice is made
//! by `SortMode`; `Auto` only picks the secondary key when every URL carries one.

mod collection;

pub use collection::{Ordering, PuzzleUrls};

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static SECONDARY_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\w+-(\w+)\.jpg").unwrap());

/// How a list of puzzle URLs is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Secondary key when every URL has one, otherwise lexicographic.
    #[default]
    Auto,
    /// Always by the full URL string.
    Lexicographic,
    /// Always by secondary key; URLs without one sort first.
    SecondaryKey,
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMode::Auto => write!(f, "auto"),
            SortMode::Lexicographic => write!(f, "lexicographic"),
            SortMode::SecondaryKey => write!(f, "secondary-key"),
        }
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(SortMode::Auto),
            "lexicographic" | "lex" => Ok(SortMode::Lexicographic),
            "secondary-key" | "secondary" => Ok(SortMode::SecondaryKey),
            other => Err(format!("unknown sort mode: {other}")),
        }
    }
}

/// Returns the second word of a `-word-word.jpg` file name in `url`, if any.
///
/// `https://host/puzzle/p-bbbb-baaa.jpg` → `Some("baaa")`
pub fn secondary_key(url: &str) -> Option<&str> {
    SECONDARY_KEY_REGEX
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Deduplicates `urls` and orders them according to `mode`.
///
/// Empty input yields an empty collection.
pub fn order_urls<I, S>(urls: I, mode: SortMode) -> PuzzleUrls
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    // BTreeSet dedups and gives lexicographic order; the stable key sort
    // below then breaks secondary-key ties by full URL.
    let unique: BTreeSet<String> = urls.into_iter().map(Into::into).collect();
    let mut urls: Vec<String> = unique.into_iter().collect();

    let ordering = match mode {
        SortMode::Lexicographic => Ordering::Lexicographic,
        SortMode::SecondaryKey => Ordering::SecondaryKey,
        SortMode::Auto => {
            if !urls.is_empty() && urls.iter().all(|u| secondary_key(u).is_some()) {
                Ordering::SecondaryKey
            } else {
                Ordering::Lexicographic
            }
        }
    };

    if ordering == Ordering::SecondaryKey {
        urls.sort_by(|a, b| {
            let ka = secondary_key(a).unwrap_or("");
            let kb = secondary_key(b).unwrap_or("");
            ka.cmp(kb)
        });
    }

    tracing::debug!(count = urls.len(), ?mode, ?ordering, "ordered puzzle urls");
    PuzzleUrls::new(urls, ordering)
}
