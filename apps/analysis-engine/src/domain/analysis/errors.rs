//! Analysis Errors

use thiserror::Error;

/// Errors that can occur while analyzing a portfolio.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The portfolio has no legs.
    #[error("no contracts supplied")]
    NoContracts,

    /// A contract failed validation before reaching the engine.
    #[error("Invalid contract at index {index}: {message}")]
    InvalidContract {
        /// Position of the contract in the request.
        index: usize,
        /// What was wrong with it.
        message: String,
    },

    /// Sampling parameters are unusable.
    #[error("Invalid sampling policy: {message}")]
    InvalidSamplingPolicy {
        /// Which parameter was rejected and why.
        message: String,
    },

    /// The padded strike range needs more samples than allowed.
    #[error("Price range too wide: {points} points exceeds limit of {limit}")]
    RangeTooWide {
        /// Samples the range would need.
        points: usize,
        /// Configured cap.
        limit: usize,
    },

    /// A price or premium is too large to compute with.
    #[error("Arithmetic overflow computing {operation}")]
    Overflow {
        /// Computation that overflowed.
        operation: &'static str,
    },
}
