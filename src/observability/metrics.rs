//! # Metrics
//!
//! Prometheus metrics for monitoring how long Configurations take to converge.
//!
//! ## Metrics Exposed
//!
//! - `configuration_waits_total` - Total number of polls, by outcome
//! - `configuration_wait_duration_seconds` - Duration of each poll, by
//!   `<operation>/<name>/<description>` key and outcome
//!
//! Recording never fails and never influences the wait itself.

use anyhow::Result;
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use std::sync::LazyLock;
use std::time::Duration;

pub(crate) static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

static WAITS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        Opts::new(
            "configuration_waits_total",
            "Total number of Configuration state polls",
        ),
        &["outcome"],
    )
    .expect("Failed to create WAITS_TOTAL metric - this should never happen")
});

static WAIT_DURATION: LazyLock<HistogramVec> = LazyLock::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "configuration_wait_duration_seconds",
            "Time taken for a Configuration to reach the polled state",
        )
        .buckets(vec![0.1, 0.5, 1.0, 5.0, 15.0, 30.0, 60.0, 120.0, 300.0, 600.0]),
        &["key", "outcome"],
    )
    .expect("Failed to create WAIT_DURATION metric - this should never happen")
});

/// Register all metrics with the crate registry
///
/// # Errors
///
/// Returns an error if a metric is already registered.
pub fn register_metrics() -> Result<()> {
    REGISTRY.register(Box::new(WAITS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(WAIT_DURATION.clone()))?;

    Ok(())
}

/// Record one finished poll
pub fn observe_wait(key: &str, outcome: &str, elapsed: Duration) {
    WAITS_TOTAL.with_label_values(&[outcome]).inc();
    WAIT_DURATION
        .with_label_values(&[key, outcome])
        .observe(elapsed.as_secs_f64());
}

/// Render the registry in the Prometheus text exposition format
///
/// # Errors
///
/// Returns an error if encoding fails.
pub fn gather_metrics() -> Result<String> {
    let encoder = TextEncoder::new();
    Ok(encoder.encode_to_string(&REGISTRY.gather())?)
}
