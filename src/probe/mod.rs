// src/probe/mod.rs
// =============================================================================
// This module sends one HTTP request per candidate URL and records the result.
//
// Submodules:
// - http: The reqwest-backed Prober used by the real CLI
// - error: Categorizes per-probe failures (timeout, DNS, TLS, ...)
// - runner: Drives many probes concurrently and streams their results
//
// The Prober trait is the seam between the runner and the network: tests
// swap in a stub that records methods and in-flight counts.
// =============================================================================

mod error;
mod http;
mod runner;

pub use error::ProbeError;
pub use http::HttpProber;
pub use runner::run;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status code recorded for a probe that never got an HTTP response
pub const FAILED_STATUS: u16 = 0;

/// The HTTP method every probe in a run uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Status line and headers only, no body (the default)
    #[default]
    Head,
    /// Full request; the body is still never read
    Get,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Head => f.write_str("HEAD"),
            Method::Get => f.write_str("GET"),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Head => reqwest::Method::HEAD,
            Method::Get => reqwest::Method::GET,
        }
    }
}

/// What a successful probe learns about a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status_code: u16,
    /// Final URL after the client followed any redirects
    pub effective_url: String,
}

/// Anything that can answer "given a URL and a method, what status comes back"
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, url: &str, method: Method) -> Result<ProbeResponse, ProbeError>;
}

/// The outcome of probing one candidate URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResult {
    /// Position of the candidate in the batch (base-major order)
    pub index: usize,
    pub candidate_url: String,
    /// HTTP status, or FAILED_STATUS when the request itself failed
    pub status_code: u16,
    pub effective_url: String,
    /// Why the request failed; only set for failed probes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProbeResult {
    pub fn from_response(index: usize, candidate_url: String, response: ProbeResponse) -> Self {
        Self {
            index,
            candidate_url,
            status_code: response.status_code,
            effective_url: response.effective_url,
            error: None,
        }
    }

    pub fn failed(index: usize, candidate_url: String, error: &ProbeError) -> Self {
        Self {
            index,
            effective_url: candidate_url.clone(),
            candidate_url,
            status_code: FAILED_STATUS,
            error: Some(error.to_string()),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}
