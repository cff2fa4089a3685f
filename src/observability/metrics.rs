//! Metrics collection and exposition.
//!
//! # Metrics
//! - `shortlink_requests_total` (counter): requests by method, status, outcome
//! - `shortlink_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Outcome label distinguishes redirects from fallback responses
//! - Exporter runs on its own listener so the route table never sees
//!   `/metrics`

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own HTTP listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            describe_counter!(
                "shortlink_requests_total",
                "Requests handled, by method, status and outcome"
            );
            describe_histogram!(
                "shortlink_request_duration_seconds",
                "Request handling latency in seconds"
            );
            tracing::info!(address = %addr, "Metrics exporter listening");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install metrics exporter");
        }
    }
}

/// Record one handled request.
pub fn record_request(method: &str, status: u16, outcome: &'static str, start: Instant) {
    counter!(
        "shortlink_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
        "outcome" => outcome
    )
    .increment(1);
    histogram!(
        "shortlink_request_duration_seconds",
        "method" => method.to_string(),
        "status" => status.to_string(),
        "outcome" => outcome
    )
    .record(start.elapsed().as_secs_f64());
}
