//! Price Range Value Object

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inclusive underlying price interval sampled for the payoff curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lowest sampled price.
    pub min: Decimal,
    /// Highest sampled price.
    pub max: Decimal,
}

impl PriceRange {
    /// Create a new range.
    #[must_use]
    pub const fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    /// Width of the range, or `None` if it does not fit in a `Decimal`.
    #[must_use]
    pub fn width(&self) -> Option<Decimal> {
        self.max.checked_sub(self.min)
    }

    /// Check if a price falls inside the range.
    #[must_use]
    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.min && price <= self.max
    }
}
