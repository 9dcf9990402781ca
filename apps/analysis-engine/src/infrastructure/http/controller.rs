//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to the analysis use case.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::application::use_cases::AnalyzePortfolioUseCase;
use crate::observability::record_http_request;

use super::request::{ContractRequest, contracts_from_requests};
use super::response::{AnalysisResponse, DataResponse, ErrorResponse, HealthResponse};

const ANALYZE_ROUTE: &str = "/analyze";

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Use case for analyzing a portfolio.
    pub analyze: Arc<AnalyzePortfolioUseCase>,
    /// Application version.
    pub version: String,
}

/// Create the HTTP router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(ANALYZE_ROUTE, post(analyze))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Analyze endpoint.
///
/// Body is a JSON array of contracts. Malformed JSON, invalid contracts and
/// engine rejections all answer 400 with `{"error": ...}`.
async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<Vec<ContractRequest>>, JsonRejection>,
) -> Response {
    let Json(requests) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Rejected malformed analyze request");
            return bad_request(rejection.body_text());
        }
    };

    let contracts = match contracts_from_requests(requests) {
        Ok(contracts) => contracts,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected invalid contract");
            return bad_request(e.to_string());
        }
    };

    match state.analyze.execute(&contracts) {
        Ok(result) => {
            record_http_request(ANALYZE_ROUTE, StatusCode::OK.as_u16());
            (
                StatusCode::OK,
                Json(DataResponse {
                    data: AnalysisResponse::from(result),
                }),
            )
                .into_response()
        }
        Err(e) => bad_request(e.to_string()),
    }
}

fn bad_request(error: String) -> Response {
    record_http_request(ANALYZE_ROUTE, StatusCode::BAD_REQUEST.as_u16());
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
}
