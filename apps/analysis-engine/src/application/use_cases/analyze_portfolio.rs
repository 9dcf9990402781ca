//! Analyze Portfolio Use Case

use std::time::Instant;

use uuid::Uuid;

use crate::domain::analysis::{AnalysisError, AnalysisResult, OptionsContract, PayoffAnalyzer};
use crate::observability::{record_analysis, record_analysis_rejection};

/// Use case for computing the risk/reward profile of one portfolio.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyzePortfolioUseCase {
    analyzer: PayoffAnalyzer,
}

impl AnalyzePortfolioUseCase {
    /// Create a new AnalyzePortfolioUseCase.
    #[must_use]
    pub const fn new(analyzer: PayoffAnalyzer) -> Self {
        Self { analyzer }
    }

    /// Get the analyzer.
    #[must_use]
    pub const fn analyzer(&self) -> &PayoffAnalyzer {
        &self.analyzer
    }

    /// Execute the use case.
    pub fn execute(&self, contracts: &[OptionsContract]) -> Result<AnalysisResult, AnalysisError> {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "portfolio.analyze",
            %request_id,
            legs = contracts.len()
        );
        let _entered = span.enter();

        let started = Instant::now();
        match self.analyzer.analyze(contracts) {
            Ok(result) => {
                let elapsed = started.elapsed().as_secs_f64();
                tracing::info!(
                    points = result.graph_data.len(),
                    max_profit = %result.max_profit,
                    max_loss = %result.max_loss,
                    break_evens = result.break_even_points.len(),
                    elapsed_ms = elapsed * 1000.0,
                    "Portfolio analyzed"
                );
                record_analysis(contracts.len(), result.graph_data.len(), elapsed);
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Portfolio analysis rejected");
                record_analysis_rejection(&e);
                Err(e)
            }
        }
    }
}
