// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # chainvote CLI
//!
//! Entry point for the `chainvote` binary. Parses CLI arguments, initializes
//! logging, and runs one of:
//!
//! - `identity` — derive or generate an identity, print it as JSON
//! - `hash`     — fingerprint a content record, print the result as JSON
//! - `verify`   — check a content record against an expected hash
//! - `version`  — print build version information
//!
//! Results go to stdout, logs to stderr.

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;

use chainvote_protocol::{ContentFingerprinter, HashableContent, IdentityDeriver};

use cli::{ChainvoteCli, Commands, ContentArgs};

fn main() -> Result<()> {
    let cli = ChainvoteCli::parse();
    logging::init_logging(&cli.log_level, cli.log_format)
        .context("failed to initialize logging")?;

    match cli.command {
        Commands::Identity(args) => run_identity(args),
        Commands::Hash(args) => run_hash(args),
        Commands::Verify(args) => run_verify(args),
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Derives (or generates) an identity and prints it.
fn run_identity(args: cli::IdentityArgs) -> Result<()> {
    let deriver = IdentityDeriver::new();
    let name = args.name.as_deref();

    let identity = match args.private_key.as_deref() {
        Some(key) => deriver
            .derive_identity(key, name)
            .context("failed to derive identity from the supplied private key")?,
        None => {
            tracing::info!("no private key supplied, generating a fresh one");
            deriver
                .generate_random_identity(name)
                .context("failed to generate identity")?
        }
    };

    let mut output = serde_json::to_value(identity.to_public())?;
    if !args.public_only {
        output["privateKey"] = json!(identity.private_key());
    }
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Computes and prints a content fingerprint.
fn run_hash(args: ContentArgs) -> Result<()> {
    let content = to_content(args);
    let fingerprinter = ContentFingerprinter::new();
    let result = fingerprinter
        .generate_hash(&content)
        .context("failed to hash content")?;

    let output = json!({
        "result": result,
        "display": result.to_display(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Verifies a content record. Exits with status 1 on mismatch so scripts
/// can gate on it.
fn run_verify(args: cli::VerifyArgs) -> Result<()> {
    let content = to_content(args.content);
    let valid = ContentFingerprinter::new().verify(&content, &args.expected);

    if valid {
        println!("valid");
        Ok(())
    } else {
        println!("invalid");
        std::process::exit(1);
    }
}

/// Builds the library's content record from CLI flags, stamping the current
/// time in epoch milliseconds when no timestamp was given.
fn to_content(args: ContentArgs) -> HashableContent {
    let timestamp = args
        .timestamp
        .unwrap_or_else(|| chrono::Utc::now().timestamp_millis());
    if args.timestamp.is_none() {
        tracing::info!(timestamp, "no timestamp supplied, using current time");
    }
    HashableContent {
        title: args.title,
        description: args.description,
        url: args.url,
        timestamp,
    }
}

/// Prints version information to stdout.
fn print_version() {
    println!("chainvote {}", env!("CARGO_PKG_VERSION"));
    println!("protocol  {}", chainvote_protocol::config::PROTOCOL_VERSION);
    println!("rustc     {}", rustc_version());
}

/// Returns the Rust compiler version used to build this binary.
fn rustc_version() -> &'static str {
    option_env!("RUSTC_VERSION").unwrap_or("unknown")
}
