use axum::{Json, extract::State, http::StatusCode};
use common::state::AppState;
use db::models::admin_log::{self, actions};
use db::models::booking::Booking;
use serde::Serialize;

use crate::response::ApiResponse;

#[derive(Debug, Serialize, Default)]
pub struct BookingListEntry {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub student_id: Option<String>,
    pub slots: Vec<String>,
    pub status: String,
    pub created_at: String,
}

/// GET /bookings
///
/// Admin-only read-only snapshot of all bookings, newest first, each with its
/// reserved slot ids. Spreadsheet/print formatting happens on the consumer
/// side; this endpoint stops at the JSON snapshot.
pub async fn list_bookings(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<Vec<BookingListEntry>>>) {
    let db = state.db();

    match Booking::all_with_slots(db).await {
        Ok(rows) => {
            admin_log::Model::record(
                db,
                actions::EXPORT,
                admin_log::STATUS_SUCCESS,
                &format!("Exported {} bookings", rows.len()),
                None,
            )
            .await;

            let entries = rows
                .into_iter()
                .map(|(b, slots)| BookingListEntry {
                    id: b.id,
                    name: b.name,
                    phone: b.phone,
                    email: b.email,
                    student_id: b.student_id,
                    slots,
                    status: b.status,
                    created_at: b.created_at.to_rfc3339(),
                })
                .collect();

            (
                StatusCode::OK,
                Json(ApiResponse::success(entries, "Bookings fetched")),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to fetch bookings: {e}"))),
        ),
    }
}
