//! Observability module for logging and metrics.
//!
//! This module provides instrumentation for the analysis engine, including
//! tracing-subscriber setup and Prometheus metrics export.

mod logging;
mod metrics;

pub use logging::{LoggingError, init_logging};
pub use self::metrics::{
    MetricsConfig, MetricsError, init_metrics, record_analysis, record_analysis_rejection,
    record_http_request,
};
