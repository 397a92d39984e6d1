use crate::dtos::SeedResponse;
use crate::models::Plan;
use crate::services::plans;
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;

#[tracing::instrument(skip(state))]
pub async fn seed_plans(State(state): State<AppState>) -> Result<Json<SeedResponse>, AppError> {
    let outcome = plans::seed_default_plans(state.store()?).await?;
    Ok(Json(SeedResponse::from(outcome)))
}

#[tracing::instrument(skip(state))]
pub async fn list_plans(State(state): State<AppState>) -> Result<Json<Vec<Plan>>, AppError> {
    let plans = plans::list_plans(state.store()?).await?;
    Ok(Json(plans))
}
