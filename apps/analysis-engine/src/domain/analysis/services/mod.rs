//! Analysis Domain Services

mod payoff_analyzer;

pub use payoff_analyzer::PayoffAnalyzer;
