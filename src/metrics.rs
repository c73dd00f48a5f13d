use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, Encoder, Histogram,
    IntCounter, IntCounterVec, TextEncoder,
};
use std::time::Instant;

use crate::{DistributionError, Result};

lazy_static! {
    // Query metrics
    pub static ref QUERY_COUNTER: IntCounter = register_int_counter!(
        "distribution_queries_total",
        "Total number of alarm state distribution queries"
    ).expect("distribution_queries_total registers once");

    pub static ref FALLBACK_COUNTER: IntCounterVec = register_int_counter_vec!(
        "distribution_fallbacks_total",
        "Queries answered with the all-zero distribution, by reason",
        &["reason"]
    ).expect("distribution_fallbacks_total registers once");

    // Reporting channel metrics
    pub static ref REPORTING_DURATION: Histogram = register_histogram!(
        "reporting_request_duration_seconds",
        "Round trip time of reporting service requests",
        vec![0.01, 0.05, 0.1, 0.5, 1.0, 2.0, 5.0]
    ).expect("reporting_request_duration_seconds registers once");
}

/// Why a query fell back to the default distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    NoRequest,
    ChannelError,
    NoResponse,
    UnexpectedResponse,
}

impl FallbackReason {
    pub fn as_str(self) -> &'static str {
        match self {
            FallbackReason::NoRequest => "no_request",
            FallbackReason::ChannelError => "channel_error",
            FallbackReason::NoResponse => "no_response",
            FallbackReason::UnexpectedResponse => "unexpected_response",
        }
    }
}

pub fn record_query() {
    QUERY_COUNTER.inc();
}

pub fn record_fallback(reason: FallbackReason) {
    FALLBACK_COUNTER.with_label_values(&[reason.as_str()]).inc();
}

/// Observes the reporting round trip when dropped.
pub struct RequestTimer {
    start: Instant,
}

impl RequestTimer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for RequestTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RequestTimer {
    fn drop(&mut self) {
        let duration = self.start.elapsed().as_secs_f64();
        REPORTING_DURATION.observe(duration);
    }
}

/// Renders every registered metric in the Prometheus text format.
pub fn gather_text() -> Result<String> {
    let mut buffer = Vec::new();
    TextEncoder::new()
        .encode(&prometheus::gather(), &mut buffer)
        .map_err(|e| DistributionError::Internal(format!("Failed to encode metrics: {}", e)))?;
    String::from_utf8(buffer)
        .map_err(|e| DistributionError::Internal(format!("Metrics are not UTF-8: {}", e)))
}
