//! CLI for the attfetch attachment fetcher.


use anyhow::Result;
use attfetch_core::config;
use attfetch_core::fetch::{self, FetchRequest};
use attfetch_core::retry::RetryPolicy;
use clap::Parser;
use std::path::PathBuf;

/// Environment variable holding the optional bearer credential.
pub const TOKEN_ENV: &str = "ATTFETCH_TOKEN";

/// Download a remote attachment to a local file, retrying transient failures.
#[derive(Debug, Parser)]
#[command(name = "attfetch")]
#[command(about = "attfetch: retrying attachment fetcher for automation pipelines", long_about = None)]
pub struct Cli {
    /// URL of the attachment to download.
    pub url: String,

    /// Destination file path (parent directory must exist).
    pub output_path: PathBuf,
}

/// Parse arguments and run the fetch.
///
/// A usage error exits 1 directly (pipeline contract: exit 1 both for bad
/// arguments and for exhausted retries), before any config or network I/O.
pub async fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            let code = match err.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    let policy = RetryPolicy::from_config(cfg.retry.as_ref());

    let token = bearer_token_from_env();
    if token.is_some() {
        tracing::debug!("using bearer credential from {}", TOKEN_ENV);
    }

    println!("Fetching URL: {}", cli.url);
    let req = FetchRequest {
        url: cli.url,
        dest: cli.output_path.clone(),
        token,
    };
    let bytes = fetch::fetch(&req, &policy).await?;

    println!(
        "File downloaded successfully to: {} ({} bytes)",
        cli.output_path.display(),
        bytes
    );
    Ok(())
}

/// Read the bearer credential from the environment; empty counts as absent.
fn bearer_token_from_env() -> Option<String> {
    match std::env::var(TOKEN_ENV) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}
