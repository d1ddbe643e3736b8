use axum::{Json, extract::State, http::StatusCode};
use common::state::AppState;
use db::models::admin_log::{self, actions};
use db::seeders;
use serde::Serialize;

use crate::response::ApiResponse;
use crate::ws::emit_slots_snapshot;

#[derive(Debug, Serialize, Default)]
pub struct ResetResponse {
    /// Epoch milliseconds of the reset that was just performed.
    pub last_reset: i64,
}

/// POST /system/reset
///
/// Admin-only destructive reset: deletes every booking, restores the fixed
/// slot catalog with zero booked counts, and stamps the reset marker. All of
/// it commits in one transaction, so clients either see the pre-reset or the
/// post-reset world, never a mix.
pub async fn reset_event(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<ResetResponse>>) {
    let db = state.db();

    match seeders::reset_event(db).await {
        Ok(at) => {
            admin_log::Model::record(
                db,
                actions::SEED_DATA,
                admin_log::STATUS_SUCCESS,
                "Event reset: bookings cleared, slots reseeded",
                None,
            )
            .await;

            emit_slots_snapshot(&state).await;

            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    ResetResponse {
                        last_reset: at.timestamp_millis(),
                    },
                    "Event reset complete",
                )),
            )
        }
        Err(e) => {
            admin_log::Model::record(
                db,
                actions::SEED_DATA,
                admin_log::STATUS_FAILURE,
                &format!("Event reset failed: {e}"),
                None,
            )
            .await;

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!("Failed to reset event: {e}"))),
            )
        }
    }
}
