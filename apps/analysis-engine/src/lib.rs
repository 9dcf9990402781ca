// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value
    )
)]

//! Analysis Engine - Rust Core Library
//!
//! Risk/reward analysis of an options portfolio held to expiration.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic
//!   - `analysis`: contracts, payoff formula, curve sampling, profit/loss
//!     bounds, break-even prices
//!
//! - **Application**: Use cases and orchestration
//!   - `use_cases`: `AnalyzePortfolio`
//!
//! - **Infrastructure**: Adapters
//!   - `http`: axum REST API (`POST /analyze`, `GET /health`)
//!
//! - **Config** / **Observability**: YAML configuration, logging and metrics

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Configuration loading and validation.
pub mod config;

/// Logging and metrics.
pub mod observability;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::analysis::{
    AnalysisError, AnalysisResult, OptionType, OptionsContract, PayoffAnalyzer, PositionSide,
    PriceRange, ProfitBound, SamplingPolicy, XYValue,
};

// Application re-exports
pub use application::use_cases::AnalyzePortfolioUseCase;

// Infrastructure re-exports
pub use infrastructure::http::{AppState, create_router};
