// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments into an immutable ProbeConfig
// 2. Read both input files and build the candidate URLs
// 3. Probe every candidate concurrently, printing results as they arrive
// 4. Print a summary to stderr and exit with the right code
//
// Exit codes:
//   0   = run completed (whatever the probes found)
//   1   = setup error (bad arguments, unreadable input file, ...)
//   2   = --fail-on-mismatch and at least one unexpected status
//   130 = interrupted with Ctrl-C
//
// Rust concepts used:
// - async/await: Every probe is a future; tokio drives thousands of them
// - Streams: Results arrive one by one as probes finish
// - Result<T, E> + ?: Setup errors bubble up to main and become exit code 1
// =============================================================================

mod batch;
mod cli;
mod config;
mod error;
mod logging;
mod probe;
mod report;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use config::ProbeConfig;
use futures::stream::{Stream, TakeUntil};
use futures::StreamExt;
use probe::HttpProber;
use report::{Presenter, Summary};
use std::future::Future;
use std::io;
use std::pin::Pin;

const EXIT_OK: i32 = 0;
const EXIT_SETUP_ERROR: i32 = 1;
const EXIT_MISMATCH: i32 = 2;
const EXIT_INTERRUPTED: i32 = 130;

// The #[tokio::main] attribute turns our async main into a real main function
// that starts a tokio runtime and runs the async code inside it
#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version print to stdout and succeed; everything
            // else (including the usage shown for zero arguments) is an error
            let _ = e.print();
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_OK,
                _ => EXIT_SETUP_ERROR,
            };
            std::process::exit(code);
        }
    };

    // From here on nothing looks at raw arguments, only at the config
    let config = ProbeConfig::from(cli);

    let exit_code = match run(&config).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            EXIT_SETUP_ERROR
        }
    };

    std::process::exit(exit_code);
}

async fn run(config: &ProbeConfig) -> Result<i32> {
    logging::init_logging()?;
    tracing::debug!(?config, "starting run");

    let bases = batch::read_lines(&config.urls_file)?;
    let suffixes = batch::read_lines(&config.uris_file)?;
    let candidates = batch::build(&bases, &suffixes);

    if candidates.is_empty() {
        eprintln!(
            "⚠️  No candidate URLs ({} base URL(s) x {} suffix(es)), nothing to probe",
            bases.len(),
            suffixes.len()
        );
        return Ok(EXIT_OK);
    }

    let limit = if config.concurrency == 0 {
        tracing::warn!(
            "concurrency limit disabled, all {} requests may be in flight at once",
            candidates.len()
        );
        "unlimited".to_string()
    } else {
        config.concurrency.to_string()
    };

    eprintln!(
        "🌐 Probing {} URL(s) ({} base x {} suffix) with {}, concurrency {}",
        candidates.len(),
        bases.len(),
        suffixes.len(),
        config.method,
        limit
    );

    // One client for the whole run (connection pooling across probes)
    let prober = HttpProber::new(config.timeout)?;

    // take_until cuts the stream as soon as Ctrl-C arrives; dropping the
    // stream drops every probe still in flight
    let results = probe::run(&prober, candidates, config.method, config.concurrency)
        .take_until(shutdown_signal());
    futures::pin_mut!(results);

    // The presenter owns stdout, so only one writer ever touches it
    let mut presenter = Presenter::new(io::stdout().lock(), config.report);
    let summary = match presenter.present(results.as_mut()).await {
        Ok(summary) => summary,
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            // Reader went away (e.g. piped into `head`); nothing left to do
            tracing::debug!("stdout closed, stopping");
            return Ok(EXIT_OK);
        }
        Err(e) => return Err(e).context("failed to write results"),
    };

    print_summary(&summary, config.report.expected_status);

    let interrupted = was_interrupted(results.as_mut());
    if interrupted {
        eprintln!("{}", "Interrupted, in-flight requests were abandoned".yellow());
    }

    Ok(exit_code(interrupted, &summary, config.fail_on_mismatch))
}

// True only when the Ctrl-C future fired. A stream that simply ran out of
// probes also ends, but leaves no result behind.
fn was_interrupted<S, F>(results: Pin<&mut TakeUntil<S, F>>) -> bool
where
    S: Stream,
    F: Future,
{
    // SAFETY: take_result only takes the unpinned result slot; the pinned
    // stream and future are never moved.
    unsafe { results.get_unchecked_mut() }.take_result().is_some()
}

// Decides the exit code once the run is over. Findings never matter
// unless --fail-on-mismatch asked for it.
fn exit_code(interrupted: bool, summary: &Summary, fail_on_mismatch: bool) -> i32 {
    if interrupted {
        EXIT_INTERRUPTED
    } else if fail_on_mismatch && summary.mismatched > 0 {
        EXIT_MISMATCH
    } else {
        EXIT_OK
    }
}

// Resolves on Ctrl-C. If the handler can't be installed the run simply
// can't be interrupted, so this never resolves.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("cannot listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

fn print_summary(summary: &Summary, expected_status: u16) {
    let as_expected = summary.probed - summary.mismatched;

    eprintln!();
    eprintln!("📊 Summary:");
    eprintln!("   ✅ {} ({}): {}", "Expected".green(), expected_status, as_expected);
    eprintln!("   ❌ {}: {}", "Unexpected".red(), summary.mismatched);
    if summary.failed > 0 {
        eprintln!("   ⚠️  {}: {}", "Failed requests".yellow(), summary.failed);
    }
    eprintln!("   📋 Total: {}", summary.probed);
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why std::process::exit() instead of returning from main?
//    - main can only return () or a Result, which maps to exit code 0 or 1
//    - We need four distinct codes (0, 1, 2, 130), so we exit explicitly
//
// 2. What does futures::pin_mut! do?
//    - Streams built from async code must not move in memory once polled
//    - pin_mut! pins the stream on the stack so we can poll it by reference
//      and still ask it afterwards whether Ctrl-C stopped it
//
// 3. Why eprintln! for the banner and summary?
//    - stdout carries only result lines, so `link-prober ... | grep 404`
//      never sees anything else
// -----------------------------------------------------------------------------
