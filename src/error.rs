// src/error.rs
// =============================================================================
// Fatal errors that stop a run before any probe is sent.
//
// Per-probe failures live in probe::ProbeError instead: those are recorded
// as results and never abort the run.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    /// One of the two input files could not be opened or read
    #[error("cannot read input file '{}': {source}", path.display())]
    InputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The shared HTTP client could not be constructed (e.g. TLS backend init)
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}
