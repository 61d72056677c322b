use std::path::PathBuf;

/// Failure to derive the host from, open, or read an access log.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("cannot derive host from log file name {path:?}: expected <name>_<host>")]
    NoHost { path: PathBuf },

    #[error("failed to open log file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read log file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
