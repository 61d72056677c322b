//! `index.html` viewer for downloaded images.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const INDEX_FILE_NAME: &str = "index.html";

/// Renders one `<img>` tag per path, in order. Paths are not escaped.
pub fn render_index<P: AsRef<Path>>(paths: &[P]) -> String {
    let mut html = String::from("<html>\n<body>\n");
    for path in paths {
        html.push_str(&format!("<img src=\"{}\">", path.as_ref().display()));
    }
    html.push_str("\n</body>\n</html>\n");
    html
}

/// Writes (overwrites) `dest_dir/index.html` and returns its path.
pub fn write_index<P: AsRef<Path>>(dest_dir: &Path, paths: &[P]) -> Result<PathBuf> {
    let index_path = dest_dir.join(INDEX_FILE_NAME);
    fs::write(&index_path, render_index(paths))
        .with_context(|| format!("failed to write {}", index_path.display()))?;
    tracing::info!(images = paths.len(), path = %index_path.display(), "wrote index");
    Ok(index_path)
}
