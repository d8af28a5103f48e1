use axum::Json;

use crate::modules::health::model::HealthResponse;

/// Liveness probe; reachable without a credential.
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
