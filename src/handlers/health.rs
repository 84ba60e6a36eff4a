use crate::models::HealthResponse;
use crate::routes;
use axum::{http::StatusCode, Json};
use chrono::{SecondsFormat, Utc};

/// GET /api/health handler - Liveness check
///
/// Always succeeds; it does not touch the data file.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    tracing::debug!("Health check passed");
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "OK".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }),
    )
}
