use crate::config::RetryConfig;
use std::time::Duration;

/// High-level classification of a failed attempt for retry purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// HTTP 404. Retryable: the asset may simply not be published yet
    /// (eventually-consistent attachment storage).
    NotFound,
    /// Any other non-2xx HTTP status.
    Http(u16),
    /// Network-level failure (connect, DNS, timeout, reset).
    Transport,
    /// Local disk write failed after a successful download. Not retried.
    Storage,
}

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry this error.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// Fixed-count, fixed-delay retry policy.
///
/// Deliberately no exponential backoff and no jitter: the tool waits out an
/// attachment that is not available yet, it does not shed load from a busy
/// server.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Delay between attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    /// Build a policy from the optional `[retry]` config section, falling back
    /// to the built-in defaults.
    pub fn from_config(cfg: Option<&RetryConfig>) -> Self {
        match cfg {
            Some(c) => Self {
                max_attempts: c.max_attempts.max(1),
                delay: Duration::from_secs_f64(c.delay_secs.max(0.0)),
            },
            None => Self::default(),
        }
    }

    /// Decide whether to retry after a failure on `attempt` (1-based).
    ///
    /// Returns `RetryDecision::NoRetry` when attempts are exhausted or the
    /// error kind is not retryable.
    pub fn decide(&self, attempt: u32, kind: ErrorKind) -> RetryDecision {
        if attempt >= self.max_attempts {
            return RetryDecision::NoRetry;
        }

        match kind {
            ErrorKind::Storage => RetryDecision::NoRetry,
            ErrorKind::NotFound | ErrorKind::Http(_) | ErrorKind::Transport => {
                RetryDecision::RetryAfter(self.delay)
            }
        }
    }
}
