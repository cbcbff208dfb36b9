//! Per-attempt error type for retry classification.

use thiserror::Error;

/// Error produced by a single fetch attempt (transport failure, HTTP error,
/// or storage failure). Classified before being converted to anyhow so the
/// retry policy can decide what happens next.
#[derive(Debug, Error)]
pub enum FetchError {
    /// libcurl reported an error (timeout, connection, DNS, etc.).
    #[error("{0}")]
    Transport(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Disk write of the downloaded body failed (e.g. disk full, permission
    /// denied). Not retried.
    #[error("storage: {0}")]
    Storage(#[from] std::io::Error),
}
