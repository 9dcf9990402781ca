//! Payoff Analyzer Domain Service
//!
//! Pure functions over a list of legs held to expiration. Every aggregate is
//! built from [`OptionsContract::checked_profit_loss`] or from the closed-form limits
//! of that formula.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::domain::analysis::errors::AnalysisError;
use crate::domain::analysis::value_objects::{
    AnalysisResult, OptionType, OptionsContract, PositionSide, PriceRange, ProfitBound,
    SamplingPolicy, XYValue,
};

/// Computes the risk/reward profile of an options portfolio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PayoffAnalyzer {
    policy: SamplingPolicy,
}

impl PayoffAnalyzer {
    /// Create an analyzer with the given sampling policy.
    #[must_use]
    pub const fn new(policy: SamplingPolicy) -> Self {
        Self { policy }
    }

    /// Get the sampling policy.
    #[must_use]
    pub const fn policy(&self) -> &SamplingPolicy {
        &self.policy
    }

    /// Run every computation over the same portfolio.
    pub fn analyze(&self, contracts: &[OptionsContract]) -> Result<AnalysisResult, AnalysisError> {
        if contracts.is_empty() {
            return Err(AnalysisError::NoContracts);
        }

        Ok(AnalysisResult {
            graph_data: self.graph_curve(contracts)?,
            max_profit: Self::max_profit(contracts)?,
            max_loss: Self::max_loss(contracts)?,
            break_even_points: Self::break_even_points(contracts)?,
        })
    }

    /// Total profit/loss of all legs at one underlying price.
    ///
    /// Legs are independent, so the portfolio payoff is their sum.
    pub fn portfolio_profit_loss(
        contracts: &[OptionsContract],
        underlying_price: Decimal,
    ) -> Result<Decimal, AnalysisError> {
        contracts
            .iter()
            .try_fold(Decimal::ZERO, |total, c| {
                c.checked_profit_loss(underlying_price)
                    .and_then(|leg| total.checked_add(leg))
            })
            .ok_or(overflow("profit_loss"))
    }

    /// Strike range padded by the policy margin on both sides.
    pub fn price_range(&self, contracts: &[OptionsContract]) -> Result<PriceRange, AnalysisError> {
        let (first, rest) = contracts.split_first().ok_or(AnalysisError::NoContracts)?;

        let (min_strike, max_strike) = rest.iter().fold(
            (first.strike_price(), first.strike_price()),
            |(lo, hi), c| (lo.min(c.strike_price()), hi.max(c.strike_price())),
        );

        let margin = self.policy.margin();
        let min = min_strike
            .checked_sub(margin)
            .ok_or(overflow("price_range"))?;
        let max = max_strike
            .checked_add(margin)
            .ok_or(overflow("price_range"))?;
        Ok(PriceRange::new(min, max))
    }

    /// Number of samples the curve will contain for a range.
    pub fn sample_count(&self, range: &PriceRange) -> Result<usize, AnalysisError> {
        let limit = self.policy.max_points();
        let too_wide = AnalysisError::RangeTooWide {
            points: usize::MAX,
            limit,
        };

        let points = range
            .width()
            .and_then(|width| width.checked_div(self.policy.step()))
            .and_then(|intervals| intervals.floor().to_usize())
            .and_then(|n| n.checked_add(1))
            .ok_or(too_wide)?;

        if points > limit {
            return Err(AnalysisError::RangeTooWide { points, limit });
        }
        Ok(points)
    }

    /// Payoff curve sampled from the low end of the range to the high end,
    /// inclusive, at the policy step. Values are normalized (no trailing zeros).
    pub fn graph_curve(&self, contracts: &[OptionsContract]) -> Result<Vec<XYValue>, AnalysisError> {
        let range = self.price_range(contracts)?;
        let points = self.sample_count(&range)?;
        let step = self.policy.step();

        let mut curve = Vec::with_capacity(points);
        let mut next = Some(range.min);
        while let Some(price) = next.filter(|p| range.contains(*p)) {
            let profit_loss = Self::portfolio_profit_loss(contracts, price)?;
            curve.push(XYValue::new(price.normalize(), profit_loss.normalize()));
            next = price.checked_add(step);
        }

        Ok(curve)
    }

    /// Maximum theoretical profit.
    ///
    /// A long call has no upside cap, so one anywhere in the portfolio makes
    /// the whole result unbounded.
    pub fn max_profit(contracts: &[OptionsContract]) -> Result<ProfitBound, AnalysisError> {
        let legs = contracts.iter().map(|c| match (c.long_short(), c.option_type()) {
            (PositionSide::Long, OptionType::Call) => Some(ProfitBound::Unbounded),
            (PositionSide::Long, OptionType::Put) => {
                c.strike_price().checked_sub(c.ask()).map(ProfitBound::Bounded)
            }
            (PositionSide::Short, _) => Some(ProfitBound::Bounded(c.bid())),
        });
        sum_bounds(legs, "max_profit")
    }

    /// Maximum theoretical loss, expressed as a positive amount.
    ///
    /// A short call has no downside cap, so one anywhere in the portfolio makes
    /// the whole result unbounded.
    pub fn max_loss(contracts: &[OptionsContract]) -> Result<ProfitBound, AnalysisError> {
        let legs = contracts.iter().map(|c| match (c.long_short(), c.option_type()) {
            (PositionSide::Long, _) => Some(ProfitBound::Bounded(c.ask())),
            (PositionSide::Short, OptionType::Call) => Some(ProfitBound::Unbounded),
            (PositionSide::Short, OptionType::Put) => {
                c.strike_price().checked_sub(c.bid()).map(ProfitBound::Bounded)
            }
        });
        sum_bounds(legs, "max_loss")
    }

    /// Distinct break-even prices, one per leg considered on its own.
    ///
    /// This does not solve the aggregate payoff for zero crossings.
    pub fn break_even_points(
        contracts: &[OptionsContract],
    ) -> Result<BTreeSet<Decimal>, AnalysisError> {
        contracts
            .iter()
            .map(|c| c.checked_break_even().map(|d| d.normalize()))
            .collect::<Option<_>>()
            .ok_or(overflow("break_even_points"))
    }
}

/// Sum per-leg bounds. `None` marks a leg whose own bound overflowed.
///
/// An unbounded leg decides the result even if the finite legs before it
/// would overflow.
fn sum_bounds(
    legs: impl Iterator<Item = Option<ProfitBound>>,
    operation: &'static str,
) -> Result<ProfitBound, AnalysisError> {
    let mut total = Some(ProfitBound::ZERO);
    for leg in legs {
        match leg.ok_or(overflow(operation))? {
            ProfitBound::Unbounded => return Ok(ProfitBound::Unbounded),
            bounded => total = total.and_then(|t| t.checked_add(bounded)),
        }
    }
    total.ok_or(overflow(operation))
}

const fn overflow(operation: &'static str) -> AnalysisError {
    AnalysisError::Overflow { operation }
}
