use axum::{Json, extract::State, http::StatusCode};
use common::state::AppState;
use db::models::admin_log::{self, actions};
use db::models::registration_config::{self, WindowUpdate};
use serde::Serialize;

use crate::response::ApiResponse;

#[derive(Debug, Serialize, Default)]
pub struct WindowResponse {
    pub open_time: String,
    pub close_time: String,
    pub manual_override: bool,
    pub is_manually_open: bool,
}

/// PUT /registration/window
///
/// Admin-only partial update of the registration window. Absent fields are
/// left untouched. Every change lands in the audit log.
///
/// ### Request Body
/// ```json
/// { "manual_override": true, "is_manually_open": true }
/// ```
pub async fn update_window(
    State(state): State<AppState>,
    Json(update): Json<WindowUpdate>,
) -> (StatusCode, Json<ApiResponse<WindowResponse>>) {
    let db = state.db();

    match registration_config::Model::update_window(db, update).await {
        Ok(config) => {
            admin_log::Model::record(
                db,
                actions::REGISTRATION_CONTROL,
                admin_log::STATUS_SUCCESS,
                &format!(
                    "Window updated: override={} manually_open={} open={} close={}",
                    config.manual_override,
                    config.is_manually_open,
                    config.open_time.to_rfc3339(),
                    config.close_time.to_rfc3339()
                ),
                None,
            )
            .await;

            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    WindowResponse {
                        open_time: config.open_time.to_rfc3339(),
                        close_time: config.close_time.to_rfc3339(),
                        manual_override: config.manual_override,
                        is_manually_open: config.is_manually_open,
                    },
                    "Registration window updated",
                )),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!(
                "Failed to update registration window: {e}"
            ))),
        ),
    }
}
