// src/probe/error.rs
// =============================================================================
// Per-probe failures. None of these abort the run: the runner turns each one
// into a result with status 0 so broken endpoints show up in the report.
// =============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("request timed out")]
    Timeout,

    #[error("could not resolve hostname")]
    Dns,

    #[error("connection failed")]
    Connect,

    #[error("SSL certificate error")]
    Tls,

    #[error("too many redirects")]
    TooManyRedirects,

    #[error("{0}")]
    Request(String),
}

impl From<reqwest::Error> for ProbeError {
    fn from(error: reqwest::Error) -> Self {
        // The candidate URL is already on the output line, and words in its
        // path must never decide the category, so drop it before reading
        // the message
        let error = error.without_url();

        // reqwest exposes a few kinds directly; DNS and TLS failures only
        // show up in the message of the underlying error chain
        let message = error_chain(&error);
        let lowered = message.to_lowercase();

        if error.is_timeout() {
            ProbeError::Timeout
        } else if error.is_redirect() {
            ProbeError::TooManyRedirects
        } else if error.is_builder() {
            ProbeError::InvalidUrl(message)
        } else if error.is_connect() {
            // TLS handshakes happen inside the connector, so a bad
            // certificate is a connect error too
            if lowered.contains("dns") || lowered.contains("resolve") {
                ProbeError::Dns
            } else if mentions_tls(&lowered) {
                ProbeError::Tls
            } else {
                ProbeError::Connect
            }
        } else if mentions_tls(&lowered) {
            ProbeError::Tls
        } else {
            ProbeError::Request(message)
        }
    }
}

fn mentions_tls(message: &str) -> bool {
    message.contains("certificate") || message.contains("ssl") || message.contains("tls")
}

fn error_chain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
