//! Analysis Result Value Object

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ProfitBound, XYValue};

/// Everything the engine reports for one portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Payoff curve in ascending price order.
    pub graph_data: Vec<XYValue>,
    /// Maximum theoretical profit.
    pub max_profit: ProfitBound,
    /// Maximum theoretical loss, as a positive amount when bounded.
    pub max_loss: ProfitBound,
    /// Distinct per-leg break-even prices, ascending.
    pub break_even_points: BTreeSet<Decimal>,
}
