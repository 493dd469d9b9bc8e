//! # Structured Logging
//!
//! `tracing` subscriber setup for a short-lived command. Logs go to stderr
//! so stdout carries only the command's result (JSON documents, hashes,
//! `valid`/`invalid`) and stays pipeable.
//!
//! The filter comes from `RUST_LOG` when it is set, otherwise from
//! `--log-level`. A malformed filter is an error rather than a silent
//! fallback: a typo in `--log-level chainvote_protocl=debug` should not
//! quietly produce no output.

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// One compact line per event, no timestamps.
    Pretty,
    /// JSON lines, for wrapping scripts that collect logs.
    Json,
}

/// Build the filter: non-empty `env_directives` win over `default_level`.
fn build_filter(
    env_directives: Option<&str>,
    default_level: &str,
) -> Result<EnvFilter, ParseError> {
    match env_directives.map(str::trim).filter(|d| !d.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives),
        None => EnvFilter::try_new(default_level),
    }
}

/// Install the global subscriber. Call once, early in `main()`.
pub fn init_logging(default_level: &str, format: LogFormat) -> anyhow::Result<()> {
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(env_directives.as_deref(), default_level)?;

    match format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .compact()
                    .without_time()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init()?,
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr).with_target(true))
            .try_init()?,
    }

    tracing::debug!(?format, "logging initialized");
    Ok(())
}
