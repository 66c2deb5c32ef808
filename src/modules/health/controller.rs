use axum::{Json, extract::State};

use crate::modules::health::model::{HealthResponse, StatusResponse};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is online", body = StatusResponse)
    ),
    tag = "Health"
)]
pub async fn root(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "online".to_string(),
        message: format!("Backend is running on {}", state.server_config.platform),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
