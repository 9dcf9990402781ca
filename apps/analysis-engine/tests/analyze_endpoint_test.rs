//! End-to-end tests for the analyze endpoint.
//!
//! Request JSON → HTTP API → use case → payoff analyzer → response JSON.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use analysis_engine::application::use_cases::AnalyzePortfolioUseCase;
use analysis_engine::config::load_config_from_string;
use analysis_engine::domain::analysis::PayoffAnalyzer;
use analysis_engine::infrastructure::http::{AppState, create_router};

fn router_with(analyzer: PayoffAnalyzer) -> axum::Router {
    create_router(AppState {
        analyze: Arc::new(AnalyzePortfolioUseCase::new(analyzer)),
        version: "test".to_string(),
    })
}

async fn post_analyze(app: axum::Router, body: &Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/analyze")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn y_at(graph: &Value, x: &str) -> String {
    graph
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["x"] == x)
        .map(|p| p["y"].as_str().unwrap().to_string())
        .unwrap_or_else(|| panic!("no point at x={x}"))
}

#[tokio::test]
async fn single_long_call_scenario() {
    let body = json!([{
        "type": "call",
        "strike_price": 100,
        "bid": 4,
        "ask": 5,
        "expiration_date": "2025-12-19T21:00:00Z",
        "long_short": "long"
    }]);

    let (status, json) = post_analyze(router_with(PayoffAnalyzer::default()), &body).await;

    assert_eq!(status, StatusCode::OK);
    let data = &json["data"];
    assert_eq!(data["max_profit"], json!({"kind": "unbounded"}));
    assert_eq!(data["max_loss"], json!({"kind": "bounded", "value": "5"}));
    assert_eq!(data["break_even_points"], json!(["105"]));

    let graph = &data["graph_data"];
    assert_eq!(graph.as_array().unwrap().len(), 41);
    assert_eq!(graph[0]["x"], "80");
    assert_eq!(graph[40]["x"], "120");
    assert_eq!(y_at(graph, "80"), "-5");
    assert_eq!(y_at(graph, "105"), "0");
    assert_eq!(y_at(graph, "120"), "15");
}

#[tokio::test]
async fn single_short_put_scenario() {
    let body = json!([{
        "type": "put",
        "strike_price": 50,
        "bid": 2,
        "ask": 3,
        "long_short": "short"
    }]);

    let (status, json) = post_analyze(router_with(PayoffAnalyzer::default()), &body).await;

    assert_eq!(status, StatusCode::OK);
    let data = &json["data"];
    assert_eq!(data["max_profit"], json!({"kind": "bounded", "value": "2"}));
    assert_eq!(data["max_loss"], json!({"kind": "bounded", "value": "48"}));
    assert_eq!(data["break_even_points"], json!(["48"]));
}

#[tokio::test]
async fn iron_condor_is_bounded_both_ways() {
    let body = json!([
        {"type": "put",  "strike_price": 90,  "bid": 1.0, "ask": 1.2, "long_short": "long"},
        {"type": "put",  "strike_price": 95,  "bid": 2.0, "ask": 2.2, "long_short": "short"},
        {"type": "call", "strike_price": 105, "bid": 2.0, "ask": 2.2, "long_short": "short"},
        {"type": "call", "strike_price": 110, "bid": 1.0, "ask": 1.2, "long_short": "long"}
    ]);

    let (status, json) = post_analyze(router_with(PayoffAnalyzer::default()), &body).await;

    assert_eq!(status, StatusCode::OK);
    let data = &json["data"];
    // Long call present: profit reported unbounded by the per-leg rule.
    assert_eq!(data["max_profit"]["kind"], "unbounded");
    // Short call present: loss reported unbounded.
    assert_eq!(data["max_loss"]["kind"], "unbounded");
    assert_eq!(
        data["break_even_points"],
        json!(["88.8", "93", "107", "111.2"])
    );

    let graph = &data["graph_data"];
    assert_eq!(graph[0]["x"], "70");
    assert_eq!(graph.as_array().unwrap().last().unwrap()["x"], "130");
    // At 100 every leg expires worthless and the net credit is kept.
    assert_eq!(y_at(graph, "100"), "1.6");
}

#[tokio::test]
async fn configured_sampling_changes_the_curve() {
    let config = load_config_from_string(
        r"
analysis:
  price_step: 2.5
  price_margin: 5
",
    )
    .unwrap();
    let analyzer = PayoffAnalyzer::new(config.analysis.sampling_policy().unwrap());

    let body = json!([{
        "type": "call", "strike_price": 100, "bid": 4, "ask": 5, "long_short": "long"
    }]);
    let (status, json) = post_analyze(router_with(analyzer), &body).await;

    assert_eq!(status, StatusCode::OK);
    let xs: Vec<&str> = json["data"]["graph_data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["x"].as_str().unwrap())
        .collect();
    assert_eq!(xs, vec!["95", "97.5", "100", "102.5", "105"]);
}

#[tokio::test]
async fn empty_portfolio_is_rejected() {
    let (status, json) = post_analyze(router_with(PayoffAnalyzer::default()), &json!([])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "no contracts supplied");
}

#[tokio::test]
async fn non_array_body_is_rejected() {
    let body = json!({"type": "call", "strike_price": 100});
    let (status, json) = post_analyze(router_with(PayoffAnalyzer::default()), &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn too_wide_range_is_rejected() {
    let config = load_config_from_string("analysis:\n  max_points: 50\n").unwrap();
    let analyzer = PayoffAnalyzer::new(config.analysis.sampling_policy().unwrap());

    let body = json!([
        {"type": "call", "strike_price": 10,  "bid": 1, "ask": 1, "long_short": "long"},
        {"type": "call", "strike_price": 500, "bid": 1, "ask": 1, "long_short": "short"}
    ]);
    let (status, json) = post_analyze(router_with(analyzer), &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("too wide"));
}

#[tokio::test]
async fn strike_at_decimal_limit_is_rejected() {
    let body = json!([{
        "type": "call",
        "strike_price": "79228162514264337593543950335",
        "bid": 0,
        "ask": 0,
        "long_short": "long"
    }]);

    let (status, json) = post_analyze(router_with(PayoffAnalyzer::default()), &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("overflow"));
}

#[tokio::test]
async fn max_loss_overflow_is_rejected() {
    let leg = json!({
        "type": "put",
        "strike_price": "50000000000000000000000000000",
        "bid": 0,
        "ask": 0,
        "long_short": "short"
    });

    let (status, json) = post_analyze(
        router_with(PayoffAnalyzer::default()),
        &json!([leg.clone(), leg]),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Arithmetic overflow computing max_loss");
}
