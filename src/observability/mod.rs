//! # Observability
//!
//! Observability modules for logging and metrics.
//!
//! - `logging`: tracing subscriber setup
//! - `metrics`: Prometheus metrics for poll durations and outcomes

pub mod logging;
pub mod metrics;

// Re-export for convenience
pub use logging::init_tracing;
pub use metrics::{gather_metrics, observe_wait, register_metrics};
