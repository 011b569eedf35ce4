// src/probe/runner.rs
// =============================================================================
// Runs one probe per candidate URL with a bound on how many are in flight.
//
// Results come out of the stream in completion order, not candidate order.
// Callers that need candidate order sort on ProbeResult::index.
//
// Cancelling is done by the caller: stop polling (or wrap the stream with
// StreamExt::take_until) and every probe still in flight is dropped.
//
// Rust concepts:
// - Streams: An async iterator; results are pulled with .next().await
// - Lifetimes: The returned stream borrows the prober ('a), so the prober
//   must outlive it
// - Generics with ?Sized: `run` accepts any Prober, including trait objects
// =============================================================================

use super::{Method, ProbeResult, Prober};
use futures::stream::{self, Stream, StreamExt};

/// Probes every candidate with `method`, at most `concurrency` at a time.
///
/// `concurrency == 0` removes the cap: every probe starts as soon as the
/// stream is first polled. With thousands of candidates that can run out of
/// file descriptors or trip rate limits on the target hosts.
pub fn run<'a, P>(
    prober: &'a P,
    candidates: Vec<String>,
    method: Method,
    concurrency: usize,
) -> impl Stream<Item = ProbeResult> + 'a
where
    P: Prober + ?Sized,
{
    // buffer_unordered needs a number, so "no limit" becomes the largest one
    let limit = if concurrency == 0 { usize::MAX } else { concurrency };

    tracing::debug!(
        candidates = candidates.len(),
        %method,
        limit = concurrency,
        "starting probes"
    );

    stream::iter(candidates.into_iter().enumerate())
        .map(move |(index, url)| probe_one(prober, index, url, method))
        .buffer_unordered(limit)
}

async fn probe_one<P>(prober: &P, index: usize, url: String, method: Method) -> ProbeResult
where
    P: Prober + ?Sized,
{
    match prober.probe(&url, method).await {
        Ok(response) => {
            tracing::trace!(url = %url, status = response.status_code, "probe finished");
            ProbeResult::from_response(index, url, response)
        }
        Err(e) => {
            tracing::debug!(url = %url, error = %e, "probe failed");
            ProbeResult::failed(index, url, &e)
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does buffer_unordered(n) do?
//    - It pulls futures from the stream and keeps at most n of them running
//    - Whichever finishes first is yielded first ("unordered")
//    - When one finishes, the next candidate is started
//
// 2. Why is a failed probe still a ProbeResult?
//    - A failing endpoint is exactly what the user wants to see
//    - Turning errors into results keeps one bad host from ending the run
// -----------------------------------------------------------------------------
