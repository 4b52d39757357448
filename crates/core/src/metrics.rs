//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Ranking (passes, candidate counts, top scores)
//! - Target resolution (which provenance won)
//! - External services (title lookup, debrid)

use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts};

// =============================================================================
// Ranking Metrics
// =============================================================================

/// Ranking passes total.
pub static RANKINGS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("titulky_rankings_total", "Total ranking passes").unwrap()
});

/// Candidates per ranking pass.
pub static CANDIDATES_RANKED: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "titulky_candidates_ranked",
            "Number of candidates ranked per pass",
        )
        .buckets(vec![0.0, 1.0, 5.0, 10.0, 25.0, 50.0, 100.0]),
    )
    .unwrap()
});

/// Final score of the best candidate per pass.
pub static TOP_SCORE: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "titulky_top_score",
            "Distribution of the best final score per ranking pass",
        )
        .buckets(vec![20.0, 40.0, 60.0, 70.0, 80.0, 90.0, 95.0, 100.0]),
    )
    .unwrap()
});

/// Resolved targets by provenance.
pub static TARGET_PROVENANCE: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "titulky_target_provenance_total",
            "Target signatures resolved by provenance",
        ),
        &["source"], // "explicit-metadata", "size-estimate", "title-guess"
    )
    .unwrap()
});

// =============================================================================
// External Service Metrics
// =============================================================================

/// External service requests total.
pub static EXTERNAL_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "titulky_external_requests_total",
            "Total external service requests",
        ),
        &["service", "result"], // service: "omdb", "real_debrid"; result: "success", "error"
    )
    .unwrap()
});

/// External service request duration.
pub static EXTERNAL_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "titulky_external_request_duration_seconds",
            "Duration of external service calls",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]),
        &["service"],
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        // Ranking
        Box::new(RANKINGS_TOTAL.clone()),
        Box::new(CANDIDATES_RANKED.clone()),
        Box::new(TOP_SCORE.clone()),
        Box::new(TARGET_PROVENANCE.clone()),
        // External services
        Box::new(EXTERNAL_REQUESTS.clone()),
        Box::new(EXTERNAL_REQUEST_DURATION.clone()),
    ]
}

/// Record the outcome of an external service call.
pub fn record_external_request(service: &str, success: bool, seconds: f64) {
    let result = if success { "success" } else { "error" };
    EXTERNAL_REQUESTS.with_label_values(&[service, result]).inc();
    EXTERNAL_REQUEST_DURATION
        .with_label_values(&[service])
        .observe(seconds);
}
