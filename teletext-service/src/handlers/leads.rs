use crate::dtos::LeadCreatedResponse;
use crate::models::Lead;
use crate::services::leads;
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;
use service_core::utils::ValidatedJson;

/// `POST /lead`. Invalid payloads are rejected by the extractor before the
/// store is reached.
#[tracing::instrument(skip(state, lead))]
pub async fn create_lead(
    State(state): State<AppState>,
    ValidatedJson(lead): ValidatedJson<Lead>,
) -> Result<Json<LeadCreatedResponse>, AppError> {
    let id = leads::submit_lead(state.store()?, &lead).await.map_err(|e| {
        tracing::error!("Failed to store lead: {}", e);
        e
    })?;
    Ok(Json(LeadCreatedResponse { id }))
}
