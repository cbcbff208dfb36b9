//! Retry policy and error classification.
//!
//! This module encapsulates the classification of failed attempts (HTTP
//! status, transport failure, disk write) and the fixed-delay retry decision
//! so that the fetch loop stays a thin driver of a shared policy.

mod classify;
mod error;
mod policy;

pub use classify::{classify, classify_http_status};
pub use error::FetchError;
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
