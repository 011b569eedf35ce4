// src/probe/http.rs
// =============================================================================
// The real Prober: one shared reqwest client, one request per candidate.
//
// Key behavior:
// - HEAD by default, GET when asked; the response body is never read
// - Redirects are followed with reqwest's default policy, and the final URL
//   is reported as the effective URL
// - A per-request timeout bounds how long one dead host can hold a slot
//
// Rust concepts:
// - Traits: HttpProber implements Prober, the same trait the test stubs use
// - async_trait: Lets a trait declare async methods
// - Into: Our Method converts into reqwest's Method with .into()
// =============================================================================

use super::{Method, ProbeError, ProbeResponse, Prober};
use crate::error::SetupError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    /// Builds the shared client. `None` leaves reqwest's own timeout default.
    pub fn new(timeout: Option<Duration>) -> Result<Self, SetupError> {
        // Identify ourselves as link-prober/<version> to the probed servers
        let mut builder = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(SetupError::HttpClient)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, url: &str, method: Method) -> Result<ProbeResponse, ProbeError> {
        // Candidates are never validated while building the batch, so a bad
        // line in an input file surfaces here as a per-probe failure
        let url = Url::parse(url).map_err(|e| ProbeError::InvalidUrl(e.to_string()))?;

        // `?` converts reqwest::Error into ProbeError through the From impl
        // in error.rs, which picks the category (timeout, DNS, TLS, ...)
        let response = self.client.request(method.into(), url).send().await?;

        // Dropping the response without reading it discards any GET body
        Ok(ProbeResponse {
            status_code: response.status().as_u16(),
            effective_url: response.url().to_string(),
        })
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is the Client stored instead of created per request?
//    - reqwest::Client keeps a pool of open connections inside
//    - Probing many paths on the same host reuses those connections
//
// 2. Why HEAD by default?
//    - HEAD returns the same status line as GET but no body
//    - Some servers answer HEAD wrongly (405), which is what --get is for
// -----------------------------------------------------------------------------
