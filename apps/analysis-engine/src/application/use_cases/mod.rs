//! Application Use Cases

mod analyze_portfolio;

pub use analyze_portfolio::AnalyzePortfolioUseCase;
