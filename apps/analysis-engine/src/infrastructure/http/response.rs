//! HTTP response DTOs.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::analysis::{AnalysisResult, ProfitBound, XYValue};

/// Success envelope: `{"data": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    /// Payload.
    pub data: T,
}

/// Error envelope: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message.
    pub error: String,
}

/// Response body of `/analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Payoff curve, ascending by `x`.
    pub graph_data: Vec<XYValue>,
    /// Maximum theoretical profit.
    pub max_profit: ProfitBound,
    /// Maximum theoretical loss.
    pub max_loss: ProfitBound,
    /// Distinct break-even prices, ascending.
    pub break_even_points: BTreeSet<Decimal>,
}

impl From<AnalysisResult> for AnalysisResponse {
    fn from(result: AnalysisResult) -> Self {
        Self {
            graph_data: result.graph_data,
            max_profit: result.max_profit,
            max_loss: result.max_loss,
            break_even_points: result.break_even_points,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}
