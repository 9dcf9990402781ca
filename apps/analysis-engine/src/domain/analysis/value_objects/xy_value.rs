//! Graph Point Value Object

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One sample of the portfolio payoff curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct XYValue {
    /// Underlying price.
    pub x: Decimal,
    /// Total profit/loss of the portfolio at `x`.
    pub y: Decimal,
}

impl XYValue {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: Decimal, y: Decimal) -> Self {
        Self { x, y }
    }
}
