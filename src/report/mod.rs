// src/report/mod.rs
// =============================================================================
// This module decides which probe results get printed, and prints them.
//
// - Verbose mode prints every result
// - Otherwise only results whose status differs from the expected status
//   are printed. The comparison is exact: expecting 20 does not accept 200
//
// The presenter is the only thing that writes to stdout. Probes hand their
// results over through the stream, so lines never interleave.
//
// Rust concepts:
// - Generics: Presenter<W: Write> writes to stdout in the CLI and to a
//   Vec<u8> in tests
// - Struct update syntax: ReportOptions { verbose: true, ..Default::default() }
// =============================================================================

mod format;

pub use format::OutputFormat;

use crate::probe::ProbeResult;
use format::format_line;
use futures::stream::{Stream, StreamExt};
use std::io::{self, Write};

/// Status code treated as healthy unless --expect says otherwise
pub const DEFAULT_EXPECTED_STATUS: u16 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub expected_status: u16,
    pub verbose: bool,
    pub format: OutputFormat,
    /// Buffer everything and print in candidate order
    pub sorted: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            expected_status: DEFAULT_EXPECTED_STATUS,
            verbose: false,
            format: OutputFormat::Text,
            sorted: false,
        }
    }
}

/// Counters for the end-of-run summary
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub probed: usize,
    /// Lines actually written to the output
    pub reported: usize,
    /// Results whose status differs from the expected one (failures included)
    pub mismatched: usize,
    pub failed: usize,
}

pub struct Presenter<W> {
    out: W,
    options: ReportOptions,
    summary: Summary,
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W, options: ReportOptions) -> Self {
        Self {
            out,
            options,
            summary: Summary::default(),
        }
    }

    pub fn is_expected(&self, result: &ProbeResult) -> bool {
        result.status_code == self.options.expected_status
    }

    /// Counts one result and writes it out if the filter lets it through
    pub fn record(&mut self, result: &ProbeResult) -> io::Result<()> {
        let expected = self.is_expected(result);

        self.summary.probed += 1;
        if result.is_failed() {
            self.summary.failed += 1;
        }
        if !expected {
            self.summary.mismatched += 1;
        }

        if expected && !self.options.verbose {
            return Ok(());
        }

        // One write_all per line, newline included, so a line is never split
        let mut line = format_line(result, self.options.format)?;
        line.push('\n');
        self.out.write_all(line.as_bytes())?;
        self.summary.reported += 1;

        Ok(())
    }

    /// Drains `results`, printing as they arrive (or all at once, in
    /// candidate order, when sorting was requested).
    pub async fn present<S>(&mut self, mut results: S) -> io::Result<Summary>
    where
        S: Stream<Item = ProbeResult> + Unpin,
    {
        if self.options.sorted {
            let mut all: Vec<ProbeResult> = results.collect().await;
            all.sort_by_key(|r| r.index);
            for result in &all {
                self.record(result)?;
            }
        } else {
            while let Some(result) = results.next().await {
                self.record(&result)?;
            }
        }

        self.out.flush()?;
        Ok(self.summary)
    }
}
