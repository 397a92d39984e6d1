use crate::dtos::DiagnosticsResponse;
use crate::services::diagnostics::inspect_store;
use crate::startup::AppState;
use axum::{extract::State, Json};

/// `GET /test`: always 200, store problems are described in the body.
#[tracing::instrument(skip(state))]
pub async fn database_diagnostics(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    Json(inspect_store(state.store.as_deref(), &state.config.database).await)
}
