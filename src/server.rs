use crate::config::AppConfig;
use crate::error::AppError;
use crate::workflows::review::rating::{FinalVerdict, RatingEngine};
use crate::workflows::review::ExpertEvaluation;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use chrono::{DateTime, Local};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RatingEngine>,
    pub readiness: Arc<AtomicBool>,
    pub metrics: Arc<PrometheusHandle>,
}

/// Request body for `POST /api/v1/review/verdict`: a collected panel plus
/// the movie's declared genres.
#[derive(Debug, Deserialize)]
pub struct VerdictRequest {
    pub evaluations: Vec<ExpertEvaluation>,
    #[serde(default)]
    pub genres: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct VerdictResponse {
    pub generated_at: DateTime<Local>,
    pub panel_size: usize,
    #[serde(flatten)]
    pub verdict: FinalVerdict,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/review/verdict", post(verdict_endpoint))
        .with_state(state)
}

/// Binds the configured address and serves the rating API until shutdown.
pub async fn serve(config: &AppConfig, engine: RatingEngine) -> Result<(), AppError> {
    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        engine: Arc::new(engine),
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = router(state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "expert review service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

async fn verdict_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<VerdictRequest>,
) -> Result<Json<VerdictResponse>, AppError> {
    let panel_size = payload.evaluations.len();
    let verdict = state.engine.aggregate(&payload.evaluations, &payload.genres)?;

    info!(
        panel_size,
        mean_score = verdict.mean_score,
        tier = %verdict.tier,
        "panel verdict produced"
    );

    Ok(Json(VerdictResponse {
        generated_at: Local::now(),
        panel_size,
        verdict,
    }))
}
