use crate::dtos::ServiceInfoResponse;
use crate::startup::AppState;
use axum::{extract::State, Json};

pub async fn service_info(State(state): State<AppState>) -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        service: state.config.site.service_name.clone(),
        city: state.config.site.city.clone(),
    })
}
