// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Usage: link-prober [OPTIONS] <URLS_FILE> <URIS_FILE>
//
// The parsed Cli is turned into a ProbeConfig (see config.rs) once, right
// after parsing; nothing else in the program looks at raw arguments.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "link-prober",
    version,
    about = "Probe every base URL x URI suffix combination and report unexpected HTTP status codes",
    long_about = "link-prober reads base URLs from URLS_FILE and URI suffixes from URIS_FILE, \
                  concatenates every base with every suffix, and sends one request per \
                  combination. By default only results whose status differs from the \
                  expected status are printed, one per line as '<status> - <url>'.",
    arg_required_else_help = true
)]
pub struct Cli {
    /// File with one base URL per line (e.g. https://example.com)
    pub urls_file: PathBuf,

    /// File with one URI suffix per line (e.g. /robots.txt), appended verbatim
    pub uris_file: PathBuf,

    /// Print every result, not only the unexpected ones
    #[arg(short, long)]
    pub verbose: bool,

    /// Send GET requests instead of HEAD (the body is still discarded)
    #[arg(long)]
    pub get: bool,

    /// Status code considered healthy; anything else is reported
    #[arg(short = 'e', long = "expect", value_name = "CODE", default_value_t = 200)]
    pub expect: u16,

    /// Maximum number of requests in flight [default: CPU count x 8]
    ///
    /// 0 removes the limit entirely, which can exhaust file descriptors or
    /// trigger rate limiting on the target hosts.
    #[arg(short = 'j', long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Per-request timeout in seconds, 0 to use the HTTP client's default
    #[arg(short, long, value_name = "SECONDS", default_value_t = 20)]
    pub timeout: u64,

    /// Print results in input order instead of completion order
    #[arg(long)]
    pub sorted: bool,

    /// Print each reported result as a JSON object (one per line)
    #[arg(long)]
    pub json: bool,

    /// Exit with code 2 if any result had an unexpected status
    #[arg(long)]
    pub fail_on_mismatch: bool,
}
