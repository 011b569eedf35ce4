// src/config.rs
// =============================================================================
// The settings of one run, built once from the parsed command line and only
// ever read after that.
// =============================================================================

use crate::cli::Cli;
use crate::probe::Method;
use crate::report::{OutputFormat, ReportOptions};
use std::path::PathBuf;
use std::time::Duration;

/// In-flight requests per available CPU when --concurrency is not given
const CONCURRENCY_PER_CPU: usize = 8;

#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub urls_file: PathBuf,
    pub uris_file: PathBuf,
    pub method: Method,
    /// 0 means no limit
    pub concurrency: usize,
    /// None leaves the HTTP client's own default in place
    pub timeout: Option<Duration>,
    pub report: ReportOptions,
    pub fail_on_mismatch: bool,
}

impl From<Cli> for ProbeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            urls_file: cli.urls_file,
            uris_file: cli.uris_file,
            method: if cli.get { Method::Get } else { Method::Head },
            concurrency: cli.concurrency.unwrap_or_else(default_concurrency),
            timeout: (cli.timeout > 0).then(|| Duration::from_secs(cli.timeout)),
            report: ReportOptions {
                expected_status: cli.expect,
                verbose: cli.verbose,
                format: if cli.json {
                    OutputFormat::Json
                } else {
                    OutputFormat::Text
                },
                sorted: cli.sorted,
            },
            fail_on_mismatch: cli.fail_on_mismatch,
        }
    }
}

pub fn default_concurrency() -> usize {
    let cpus = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    cpus * CONCURRENCY_PER_CPU
}
