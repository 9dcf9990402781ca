//! Portfolio Analysis Bounded Context
//!
//! Expiration payoff analysis of an options portfolio:
//! - Per-leg and aggregate profit/loss at a given underlying price
//! - Payoff curve sampled over the padded strike range
//! - Maximum theoretical profit and loss
//! - Per-leg break-even prices

pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::AnalysisError;
pub use services::PayoffAnalyzer;
pub use value_objects::{
    AnalysisResult, OptionType, OptionsContract, PositionSide, PriceRange, ProfitBound,
    SamplingPolicy, XYValue,
};
