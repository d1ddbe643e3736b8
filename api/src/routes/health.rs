use crate::response::ApiResponse;
use axum::{Json, Router, http::StatusCode, routing::get};
use common::state::AppState;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health))
}

/// GET /health
///
/// Liveness probe; no authentication required.
pub async fn health() -> (StatusCode, Json<ApiResponse<&'static str>>) {
    (
        StatusCode::OK,
        Json(ApiResponse::success("OK", "Health check passed")),
    )
}
