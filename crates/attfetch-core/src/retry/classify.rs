//! Map HTTP status and attempt errors into retry policy error kinds.

use crate::retry::error::FetchError;
use crate::retry::policy::ErrorKind;

/// Classify an HTTP status code for retry decisions.
///
/// 404 gets its own kind so logs can distinguish "not published yet" from
/// other HTTP failures; every non-2xx status is retryable.
pub fn classify_http_status(code: u32) -> ErrorKind {
    match code {
        404 => ErrorKind::NotFound,
        _ => ErrorKind::Http(code as u16),
    }
}

/// Classify a fetch attempt error into an ErrorKind.
pub fn classify(e: &FetchError) -> ErrorKind {
    match e {
        FetchError::Transport(_) => ErrorKind::Transport,
        FetchError::Http(code) => classify_http_status(*code),
        FetchError::Storage(_) => ErrorKind::Storage,
    }
}
