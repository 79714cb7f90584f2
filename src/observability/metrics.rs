//! Metrics collection.
//!
//! # Metrics
//! - `ganjoor_requests_total` (counter): attempts by method, status
//! - `ganjoor_request_duration_seconds` (histogram): once per logical request, first attempt to final outcome, backoff included
//! - `ganjoor_request_retries_total` (counter): rate-limit retries by method
//! - `ganjoor_transport_failures_total` (counter): attempts that got no response
//! - `ganjoor_crawl_pages_total` (counter): listing pages fetched by crawls
//!
//! No recorder is installed here; without one every call is a no-op.

use std::time::Instant;

/// One attempt finished with `status`.
pub fn record_request(method: &'static str, status: u16) {
    metrics::counter!(
        "ganjoor_requests_total",
        "method" => method,
        "status" => status.to_string()
    )
    .increment(1);
}

/// A logical request finished, successfully or not, after all of its attempts.
pub fn record_duration(method: &'static str, start_time: Instant) {
    metrics::histogram!("ganjoor_request_duration_seconds", "method" => method)
        .record(start_time.elapsed().as_secs_f64());
}

pub fn record_retry(method: &'static str) {
    metrics::counter!("ganjoor_request_retries_total", "method" => method).increment(1);
}

pub fn record_transport_failure(method: &'static str) {
    metrics::counter!("ganjoor_transport_failures_total", "method" => method).increment(1);
}

pub fn record_crawl_page() {
    metrics::counter!("ganjoor_crawl_pages_total").increment(1);
}
