//! Liveness HTTP handler.

use axum::response::Json;

use crate::runtime::types::HealthResponse;

/// GET /health - Liveness check
///
/// Returns 200 unconditionally with the current UTC timestamp. No side
/// effects, no dependencies on the registry.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::now())
}
