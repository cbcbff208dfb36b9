//! Logging init: structured diagnostics on stderr.
//!
//! stdout is reserved for the progress/success lines consumed by the
//! automation pipeline, so all tracing output goes to stderr.

use tracing_subscriber::EnvFilter;

/// Initialize tracing to stderr with an env-overridable filter
/// (`RUST_LOG`, default info plus debug for the attfetch crates). ANSI off
/// for log capture.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,attfetch_core=debug,attfetch_cli=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
