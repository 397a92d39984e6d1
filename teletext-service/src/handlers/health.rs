use crate::services::get_metrics;
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use service_core::error::AppError;

/// Liveness check. Does not touch the store.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "teletext-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness check: the store must be configured and answer a ping.
pub async fn readiness_check(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let store = state.store.as_deref().ok_or(AppError::ServiceUnavailable)?;
    store
        .ping()
        .await
        .map_err(|_| AppError::ServiceUnavailable)?;
    Ok(StatusCode::OK)
}

pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}

pub async fn not_found() -> AppError {
    AppError::NotFound(anyhow::anyhow!("Not found"))
}
