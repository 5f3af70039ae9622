//! Metrics and observability utilities
//!
//! Provides Prometheus metrics with standardized naming conventions
//! for the lookup store and graph derivation paths.

use metrics::{counter, describe_counter, describe_histogram, histogram, Unit};
use std::time::Instant;

/// Metrics prefix for all FacDash metrics
pub const METRICS_PREFIX: &str = "facdash";

/// Histogram buckets for lookup store reads (in seconds)
///
/// Reads are whole-document loads from local disk; the tail buckets
/// only matter when the data directory sits on network storage.
pub const STORE_READ_BUCKETS: &[f64] = &[
    0.001,  // 1ms
    0.005,  // 5ms
    0.010,  // 10ms
    0.025,  // 25ms
    0.050,  // 50ms
    0.100,  // 100ms
    0.250,  // 250ms
    0.500,  // 500ms
    1.000,  // 1s
    2.500,  // 2.5s
];

/// Register all metric descriptions
pub fn register_metrics() {
    // Lookup store metrics
    describe_counter!(
        format!("{}_store_reads_total", METRICS_PREFIX),
        Unit::Count,
        "Total document reads from the lookup store"
    );

    describe_counter!(
        format!("{}_store_read_errors_total", METRICS_PREFIX),
        Unit::Count,
        "Total failed document reads from the lookup store"
    );

    describe_histogram!(
        format!("{}_store_read_duration_seconds", METRICS_PREFIX),
        Unit::Seconds,
        "Lookup store document read latency in seconds"
    );

    // Graph derivation metrics
    describe_counter!(
        format!("{}_graph_builds_total", METRICS_PREFIX),
        Unit::Count,
        "Total collaboration graphs derived"
    );

    describe_histogram!(
        format!("{}_graph_edges_count", METRICS_PREFIX),
        Unit::Count,
        "Edge count of derived collaboration graphs"
    );

    tracing::info!("Metrics registered");
}

/// Helper to record a lookup store read
pub fn record_store_read(document: &str, started: Instant, success: bool) {
    let duration = started.elapsed().as_secs_f64();

    if success {
        counter!(
            format!("{}_store_reads_total", METRICS_PREFIX),
            "document" => document.to_string()
        )
        .increment(1);

        histogram!(
            format!("{}_store_read_duration_seconds", METRICS_PREFIX),
            "document" => document.to_string()
        )
        .record(duration);
    } else {
        counter!(
            format!("{}_store_read_errors_total", METRICS_PREFIX),
            "document" => document.to_string()
        )
        .increment(1);
    }
}

/// Helper to record a derived collaboration graph
pub fn record_graph_build(kind: &str, edge_count: usize) {
    counter!(
        format!("{}_graph_builds_total", METRICS_PREFIX),
        "kind" => kind.to_string()
    )
    .increment(1);

    histogram!(
        format!("{}_graph_edges_count", METRICS_PREFIX),
        "kind" => kind.to_string()
    )
    .record(edge_count as f64);
}
