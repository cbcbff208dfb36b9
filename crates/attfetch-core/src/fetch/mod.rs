//! Whole-file attachment fetch with bounded retry.
//!
//! One request in flight at a time: each attempt downloads the full body into
//! memory on a blocking thread, then the body is written atomically to the
//! destination. Between failed attempts the task suspends with a non-blocking
//! sleep.

mod http;

use crate::retry::{classify, FetchError, RetryDecision, RetryPolicy};
use crate::storage;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// A single fetch: where to get the bytes and where to put them.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// Remote resource. No scheme validation beyond what libcurl enforces.
    pub url: String,
    /// Destination file path; the parent directory must exist.
    pub dest: PathBuf,
    /// Optional bearer credential, sent as `Authorization: Bearer <token>`
    /// on every attempt.
    pub token: Option<String>,
}

/// Download `req.url` to `req.dest`, retrying per `policy`.
///
/// Returns the number of bytes written. On terminal failure (attempts
/// exhausted, or a storage failure) the error names the URL and the attempt
/// count. The destination is only ever written from a fully read 2xx body.
pub async fn fetch(req: &FetchRequest, policy: &RetryPolicy) -> Result<u64> {
    let mut attempt = 1u32;
    loop {
        tracing::debug!(attempt, url = %req.url, "starting fetch attempt");

        let downloaded = tokio::task::spawn_blocking({
            let url = req.url.clone();
            let token = req.token.clone();
            move || http::get(&url, token.as_deref())
        })
        .await
        .context("fetch task panicked")?;

        let result: Result<u64, FetchError> = downloaded.and_then(|body| {
            storage::write_atomic(&req.dest, &body)?;
            Ok(body.len() as u64)
        });

        match result {
            Ok(bytes) => {
                tracing::info!(attempt, bytes, url = %req.url, "fetch succeeded");
                return Ok(bytes);
            }
            Err(e) => {
                let kind = classify(&e);
                match policy.decide(attempt, kind) {
                    RetryDecision::NoRetry => {
                        return Err(anyhow::Error::new(e).context(format!(
                            "failed to fetch {} after {} attempts",
                            req.url, attempt
                        )));
                    }
                    RetryDecision::RetryAfter(delay) => {
                        tracing::warn!(
                            attempt,
                            url = %req.url,
                            "attempt failed: {}; retrying in {:.1}s",
                            e,
                            delay.as_secs_f64()
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                    }
                }
            }
        }
    }
}
