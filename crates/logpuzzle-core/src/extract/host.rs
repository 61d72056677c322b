//! Host derivation from the log file name.

use super::ExtractError;
use std::path::Path;

/// Builds `<scheme>://<host>` where host is everything after the last `_`
/// in the base name of `path`.
pub fn host_from_log_path(path: &Path, scheme: &str) -> Result<String, ExtractError> {
    let no_host = || ExtractError::NoHost {
        path: path.to_path_buf(),
    };

    let name = path.file_name().ok_or_else(no_host)?.to_string_lossy();
    let (_, host) = name.rsplit_once('_').ok_or_else(no_host)?;
    let host = host.trim();
    if host.is_empty() {
        return Err(no_host());
    }
    Ok(format!("{scheme}://{host}"))
}
