// src/report/format.rs
// =============================================================================
// Turns one ProbeResult into one output line.
//
// Text lines look like "404 - http://a.test/x". The status is zero-padded to
// three digits so a failed probe reads "000 - <url> (<reason>)".
// =============================================================================

use crate::probe::ProbeResult;

/// How reported results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// "{status_code} - {effective_url}"
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

pub fn format_line(result: &ProbeResult, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(format_text(result)),
        OutputFormat::Json => serde_json::to_string(result),
    }
}

fn format_text(result: &ProbeResult) -> String {
    match &result.error {
        Some(error) => format!(
            "{:03} - {} ({})",
            result.status_code, result.effective_url, error
        ),
        None => format!("{:03} - {}", result.status_code, result.effective_url),
    }
}
