use axum::{Json, extract::State, http::StatusCode};
use common::state::AppState;
use db::models::session_slot;
use serde::Serialize;

use crate::response::ApiResponse;

#[derive(Debug, Serialize, Default)]
pub struct SlotResponse {
    pub id: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_time: String,
    pub end_time: String,
    pub capacity: i32,
    pub booked: i32,
    pub remaining: i32,
}

impl From<session_slot::Model> for SlotResponse {
    fn from(m: session_slot::Model) -> Self {
        let remaining = m.remaining();
        Self {
            id: m.id,
            category: m.category,
            title: m.title,
            description: m.description,
            location: m.location,
            start_time: m.start_time,
            end_time: m.end_time,
            capacity: m.capacity,
            booked: m.booked,
            remaining,
        }
    }
}

/// GET /slots
///
/// Full slot list ordered by id; the same snapshot the `/ws/slots` stream
/// pushes after every committed booking. Counts may be stale by the time a
/// submission runs; the booking transaction re-reads them fresh.
pub async fn list_slots(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<Vec<SlotResponse>>>) {
    match session_slot::Model::find_all_ordered(state.db()).await {
        Ok(slots) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                slots.into_iter().map(SlotResponse::from).collect(),
                "Slots fetched",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to fetch slots: {e}"))),
        ),
    }
}
