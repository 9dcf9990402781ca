//! Profit Bound Value Object

use std::fmt;
use std::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Best-case profit or worst-case loss of a portfolio held to expiration.
///
/// Serialized adjacently tagged: `{"kind":"bounded","value":"5"}` or
/// `{"kind":"unbounded"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ProfitBound {
    /// Finite bound.
    Bounded(Decimal),
    /// Grows without limit as the underlying moves in one direction.
    Unbounded,
}

impl ProfitBound {
    /// A bounded value of zero.
    pub const ZERO: Self = Self::Bounded(Decimal::ZERO);

    /// Check if the bound is unbounded.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// Get the finite value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<Decimal> {
        match self {
            Self::Bounded(v) => Some(*v),
            Self::Unbounded => None,
        }
    }

    /// Add two bounds, or `None` if the finite sum overflows.
    ///
    /// Unbounded absorbs everything it is added to.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        match (self, rhs) {
            (Self::Bounded(a), Self::Bounded(b)) => a.checked_add(b).map(Self::Bounded),
            _ => Some(Self::Unbounded),
        }
    }
}

impl Default for ProfitBound {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Unbounded absorbs everything it is added to.
///
/// Panics if the finite sum overflows. See [`ProfitBound::checked_add`].
impl Add for ProfitBound {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Bounded(a), Self::Bounded(b)) => Self::Bounded(a + b),
            _ => Self::Unbounded,
        }
    }
}

impl fmt::Display for ProfitBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded(v) => write!(f, "{v}"),
            Self::Unbounded => write!(f, "unbounded"),
        }
    }
}
