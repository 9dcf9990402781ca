//! Sampling Policy Value Object

use rust_decimal::Decimal;

use crate::domain::analysis::errors::AnalysisError;

/// Default distance between curve samples.
pub const DEFAULT_PRICE_STEP: Decimal = Decimal::ONE;

/// Default padding added below the lowest and above the highest strike.
pub const DEFAULT_PRICE_MARGIN: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Default cap on the number of curve samples.
pub const DEFAULT_MAX_POINTS: usize = 100_000;

/// How the payoff curve is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingPolicy {
    step: Decimal,
    margin: Decimal,
    max_points: usize,
}

impl SamplingPolicy {
    /// Create a validated policy.
    ///
    /// The step must be positive, the margin non-negative and the point cap
    /// non-zero.
    pub fn new(step: Decimal, margin: Decimal, max_points: usize) -> Result<Self, AnalysisError> {
        if step <= Decimal::ZERO {
            return Err(AnalysisError::InvalidSamplingPolicy {
                message: format!("price step must be positive, got {step}"),
            });
        }
        if margin < Decimal::ZERO {
            return Err(AnalysisError::InvalidSamplingPolicy {
                message: format!("price margin must not be negative, got {margin}"),
            });
        }
        if max_points == 0 {
            return Err(AnalysisError::InvalidSamplingPolicy {
                message: "max points must be greater than zero".to_string(),
            });
        }
        Ok(Self {
            step,
            margin,
            max_points,
        })
    }

    /// Get the sampling step.
    #[must_use]
    pub const fn step(&self) -> Decimal {
        self.step
    }

    /// Get the strike padding.
    #[must_use]
    pub const fn margin(&self) -> Decimal {
        self.margin
    }

    /// Get the sample cap.
    #[must_use]
    pub const fn max_points(&self) -> usize {
        self.max_points
    }
}

impl Default for SamplingPolicy {
    fn default() -> Self {
        Self {
            step: DEFAULT_PRICE_STEP,
            margin: DEFAULT_PRICE_MARGIN,
            max_points: DEFAULT_MAX_POINTS,
        }
    }
}
