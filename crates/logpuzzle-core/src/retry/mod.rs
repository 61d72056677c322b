//! Retry and backoff policy for image fetches.
//!
//! Fetch failures are classified (timeouts, throttling, connection failures,
//! 5xx) and retried with capped exponential backoff. Client errors (4xx) and
//! anything unclassified fail immediately.

mod classify;
mod policy;
mod run;

pub use classify::{classify, classify_curl_error, classify_http_status};
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
