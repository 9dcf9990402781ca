//! Prometheus metrics for the analysis engine.
//!
//! # Example
//!
//! ```ignore
//! use analysis_engine::observability::{init_metrics, MetricsConfig};
//!
//! let config = MetricsConfig::default();
//! init_metrics(&config)?;
//!
//! record_analysis(2, 91, 0.000_4);
//! ```

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::domain::analysis::AnalysisError;

/// Configuration for the metrics exporter.
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// Address to bind the metrics HTTP listener.
    pub listen_addr: SocketAddr,
    /// Histogram buckets for latency measurements (in seconds).
    pub latency_buckets: Vec<f64>,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 9090),
            // Latency buckets from 10us to 100ms
            latency_buckets: vec![
                0.000_01, 0.000_05, 0.000_1, 0.000_5, 0.001, 0.005, 0.01, 0.05, 0.1,
            ],
        }
    }
}

impl MetricsConfig {
    /// Create a new metrics configuration with custom address.
    #[must_use]
    pub fn with_addr(addr: SocketAddr) -> Self {
        Self {
            listen_addr: addr,
            ..Default::default()
        }
    }
}

/// Error type for metrics operations.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// Failed to configure metrics exporter.
    #[error("metrics configuration error: {0}")]
    Configuration(String),
    /// Failed to install metrics exporter.
    #[error("metrics installation error: {0}")]
    Installation(String),
}

/// Initialize the Prometheus metrics exporter.
///
/// This starts an HTTP listener that exposes metrics at `/metrics`.
pub fn init_metrics(config: &MetricsConfig) -> Result<(), MetricsError> {
    PrometheusBuilder::new()
        .with_http_listener(config.listen_addr)
        .set_buckets(&config.latency_buckets)
        .map_err(|e| MetricsError::Configuration(e.to_string()))?
        .install()
        .map_err(|e| MetricsError::Installation(e.to_string()))?;

    tracing::info!(
        addr = %config.listen_addr,
        "Prometheus metrics exporter started"
    );

    Ok(())
}

// ============================================================================
// Analysis Metrics
// ============================================================================

/// Record a completed analysis.
///
/// # Arguments
///
/// * `legs` - Number of contracts in the portfolio
/// * `points` - Number of curve samples produced
/// * `latency_seconds` - Engine time in seconds
pub fn record_analysis(legs: usize, points: usize, latency_seconds: f64) {
    counter!("analysis_requests_total", "status" => "ok").increment(1);
    histogram!("analysis_latency_seconds").record(latency_seconds);
    histogram!("analysis_legs").record(legs as f64);
    histogram!("analysis_graph_points").record(points as f64);
}

/// Record an analysis the engine refused to run.
pub fn record_analysis_rejection(error: &AnalysisError) {
    let reason = match error {
        AnalysisError::NoContracts => "no_contracts",
        AnalysisError::InvalidContract { .. } => "invalid_contract",
        AnalysisError::InvalidSamplingPolicy { .. } => "invalid_sampling_policy",
        AnalysisError::RangeTooWide { .. } => "range_too_wide",
        AnalysisError::Overflow { .. } => "overflow",
    };
    counter!(
        "analysis_requests_total",
        "status" => "rejected",
        "reason" => reason
    )
    .increment(1);
}

/// Record an HTTP request.
///
/// # Arguments
///
/// * `route` - Route path (e.g., "/analyze")
/// * `status` - Response status code
pub fn record_http_request(route: &str, status: u16) {
    counter!(
        "http_requests_total",
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}
