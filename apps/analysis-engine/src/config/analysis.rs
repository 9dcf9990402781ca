//! Payoff curve sampling configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::analysis::AnalysisError;
use crate::domain::analysis::SamplingPolicy;
use crate::domain::analysis::value_objects::{
    DEFAULT_MAX_POINTS, DEFAULT_PRICE_MARGIN, DEFAULT_PRICE_STEP,
};

/// Analysis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Distance between curve samples.
    #[serde(default = "default_price_step")]
    pub price_step: Decimal,
    /// Padding below the lowest and above the highest strike.
    #[serde(default = "default_price_margin")]
    pub price_margin: Decimal,
    /// Maximum samples per curve.
    #[serde(default = "default_max_points")]
    pub max_points: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            price_step: default_price_step(),
            price_margin: default_price_margin(),
            max_points: default_max_points(),
        }
    }
}

impl AnalysisConfig {
    /// Build the engine sampling policy.
    pub fn sampling_policy(&self) -> Result<SamplingPolicy, AnalysisError> {
        SamplingPolicy::new(self.price_step, self.price_margin, self.max_points)
    }
}

const fn default_price_step() -> Decimal {
    DEFAULT_PRICE_STEP
}

const fn default_price_margin() -> Decimal {
    DEFAULT_PRICE_MARGIN
}

const fn default_max_points() -> usize {
    DEFAULT_MAX_POINTS
}
