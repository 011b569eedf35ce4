// src/logging.rs
// =============================================================================
// Sets up structured logging with `tracing`.
//
// Log events go to stderr and are filtered by the RUST_LOG environment
// variable, e.g. RUST_LOG=debug shows every failed probe and its reason.
//
// Rust concepts:
// - Macros: tracing::debug!/warn! record events with key=value fields
// - Builder pattern: tracing_subscriber::fmt() is configured step by step
// =============================================================================

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Initialize structured logging on stderr, filtered by `RUST_LOG`.
///
/// Stdout carries only result lines, so log events never end up in a pipe
/// that parses them. Defaults to warnings only.
pub fn init_logging() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // try_init instead of init: a second call returns an error rather than
    // panicking
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))?;

    tracing::debug!("logging initialized");

    Ok(())
}
