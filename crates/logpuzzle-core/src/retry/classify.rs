//! Maps a failed image fetch onto the `ErrorKind` the retry policy decides on.

use super::policy::ErrorKind;
use crate::fetch::FetchError;

/// 429/503 mean the image host is shedding load; other 5xx are transient.
/// Everything else (404 for a missing puzzle piece, 403, ...) is final.
pub fn classify_http_status(code: u32) -> ErrorKind {
    match code {
        429 | 503 => ErrorKind::Throttled,
        500..=599 => ErrorKind::Http5xx(code as u16),
        _ => ErrorKind::Other,
    }
}

/// Transport failures worth another attempt: the image host timed out, could
/// not be reached, or cut the body short. Bad URLs and local write errors are not.
pub fn classify_curl_error(e: &curl::Error) -> ErrorKind {
    let unreachable = e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy();
    let dropped = e.is_send_error()
        || e.is_recv_error()
        || e.is_read_error()
        || e.is_got_nothing()
        || e.is_partial_file();

    if e.is_operation_timedout() {
        ErrorKind::Timeout
    } else if unreachable || dropped {
        ErrorKind::Connection
    } else {
        ErrorKind::Other
    }
}

pub fn classify(e: &FetchError) -> ErrorKind {
    match e {
        FetchError::Curl(ce) => classify_curl_error(ce),
        FetchError::Http(code) => classify_http_status(*code),
    }
}
