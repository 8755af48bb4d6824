use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use aimdb::server::{router, AppState};
use aimdb::workflows::review::rating::{RatingConfig, RatingEngine};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use metrics_exporter_prometheus::PrometheusBuilder;
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_state() -> AppState {
    // build_recorder avoids installing a global recorder, so each test can
    // construct its own router.
    let recorder = PrometheusBuilder::new().build_recorder();
    AppState {
        engine: Arc::new(RatingEngine::new(RatingConfig::standard())),
        readiness: Arc::new(AtomicBool::new(true)),
        metrics: Arc::new(recorder.handle()),
    }
}

fn verdict_request(payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/review/verdict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

fn expert(id: &str, overall: f64, confidence: f64, categories: Value) -> Value {
    json!({
        "expert_id": id,
        "overall_score": overall,
        "self_confidence": confidence,
        "category_scores": categories,
        "comment": "one-liner",
        "review": "full rationale"
    })
}

#[tokio::test]
async fn healthcheck_reports_ok() {
    let app = router(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn verdict_endpoint_rates_a_panel() {
    let app = router(test_state());
    let payload = json!({
        "evaluations": [
            expert("critic-1", 80.0, 0.9, json!({ "Screenplay Quality": 12.0 })),
            expert("critic-2", 85.0, 0.9, json!({ "Screenplay Quality": 14.0 })),
            expert("critic-3", 90.0, 0.9, json!({})),
        ],
        "genres": []
    });

    let response = app
        .oneshot(verdict_request(payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["panel_size"], json!(3));
    assert_eq!(body["mean_score"], json!(85.0));
    assert_eq!(body["tier"], json!("Outstanding"));
    assert_eq!(body["genre_bonus_applied"], json!(0.0));
    assert_eq!(
        body["category_breakdown"]["Screenplay Quality"],
        json!({ "status": "rated", "mean": 13.0, "contributors": 2 })
    );
    assert_eq!(
        body["category_breakdown"]["Innovation"],
        json!({ "status": "unrated" })
    );
    assert!(body["generated_at"].is_string());

    let low = body["confidence_interval"]["low"].as_f64().expect("low");
    let high = body["confidence_interval"]["high"].as_f64().expect("high");
    assert!(low <= 85.0 && 85.0 <= high);
}

#[tokio::test]
async fn verdict_endpoint_applies_declared_genres() {
    let app = router(test_state());
    let payload = json!({
        "evaluations": [expert("critic-1", 78.0, 0.8, json!({}))],
        "genres": ["Film-Noir"]
    });

    let response = app
        .oneshot(verdict_request(payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["genre_bonus_applied"], json!(2.5));
    assert_eq!(body["mean_score"], json!(80.5));
    assert_eq!(body["tier"], json!("Excellent"));
}

#[tokio::test]
async fn empty_panel_is_a_bad_request() {
    let app = router(test_state());
    let payload = json!({ "evaluations": [], "genres": [] });

    let response = app
        .oneshot(verdict_request(payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    let message = body["error"].as_str().expect("error message");
    assert!(message.contains("no expert evaluations"), "got: {message}");
}

#[tokio::test]
async fn out_of_range_category_score_is_a_bad_request() {
    let app = router(test_state());
    let payload = json!({
        "evaluations": [
            expert("overzealous", 80.0, 0.9, json!({ "Visual Aesthetics": 20.0 })),
        ]
    });

    let response = app
        .oneshot(verdict_request(payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    let message = body["error"].as_str().expect("error message");
    assert!(message.contains("overzealous"), "got: {message}");
}
