use axum::{Json, extract::State, http::StatusCode};
use common::state::AppState;
use db::models::registration_config;
use serde::Serialize;

use crate::response::ApiResponse;

#[derive(Debug, Serialize, Default)]
pub struct LastResetResponse {
    /// Epoch milliseconds of the most recent event reset, or null if the
    /// event has never been reset.
    pub last_reset: Option<i64>,
}

/// GET /system/last-reset
///
/// Public marker clients compare against the `issued_at` of a locally held
/// device ticket. Strictly newer reset means the ticket refers to wiped data
/// and should be discarded.
pub async fn last_reset(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<LastResetResponse>>) {
    match registration_config::Model::last_reset(state.db()).await {
        Ok(at) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                LastResetResponse {
                    last_reset: at.map(|t| t.timestamp_millis()),
                },
                "Last reset fetched",
            )),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to read last reset marker");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse::error("Reset marker is currently unavailable")),
            )
        }
    }
}
