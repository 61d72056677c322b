//! Ordered, duplicate-free collection of puzzle URLs.

/// Which ordering was applied to a `PuzzleUrls`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordering {
    Lexicographic,
    SecondaryKey,
}

/// Ordered puzzle URLs with no duplicates. Only built by `order_urls`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleUrls {
    urls: Vec<String>,
    ordering: Ordering,
}

impl PuzzleUrls {
    pub(super) fn new(urls: Vec<String>, ordering: Ordering) -> Self {
        Self { urls, ordering }
    }

    pub fn ordering(&self) -> Ordering {
        self.ordering
    }

    pub fn as_slice(&self) -> &[String] {
        &self.urls
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.urls.iter()
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.urls
    }
}

impl<'a> IntoIterator for &'a PuzzleUrls {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.urls.iter()
    }
}
