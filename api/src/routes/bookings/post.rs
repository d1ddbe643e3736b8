use axum::{Extension, Json, extract::State, http::StatusCode};
use common::{format_validation_errors, state::AppState};
use db::models::booking::{Booking, BookingError, UserDetails};
use db::selection::Selection;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::ws::emit_slots_snapshot;

lazy_static::lazy_static! {
    static ref PHONE_REGEX: regex::Regex = regex::Regex::new(r"^09\d{8}$").unwrap();
}

#[derive(Debug, Deserialize, Validate)]
pub struct SubmitBookingRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(regex(path = *PHONE_REGEX, message = "Phone must be in format 09xxxxxxxx"))]
    pub phone: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub student_id: Option<String>,

    /// The attendee's selection; must satisfy the C / D / A+B rule.
    pub selection: Selection,
}

#[derive(Debug, Serialize, Default)]
pub struct BookingCreatedResponse {
    pub id: i64,
    pub slots: Vec<String>,
    pub created_at: String,
}

/// POST /bookings
///
/// Submits a booking for the authenticated session identity. The reservation
/// is atomic: every selected slot's capacity is re-checked and incremented
/// together with the record insert, or nothing happens at all.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Amy",
///   "phone": "0912345678",
///   "selection": { "selected_a": "2F_A", "selected_b": "2F_B" }
/// }
/// ```
///
/// ### Responses
///
/// - `201 Created`
/// ```json
/// {
///   "success": true,
///   "data": { "id": 12, "slots": ["2F_A", "2F_B"], "created_at": "..." },
///   "message": "Booking confirmed"
/// }
/// ```
///
/// - `400 Bad Request` — validation failure or no valid session combination
/// - `404 Not Found` — a selected slot no longer exists (stale client data)
/// - `409 Conflict` — a selected slot is fully booked; the message names it
pub async fn submit_booking(
    State(state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<SubmitBookingRequest>,
) -> (StatusCode, Json<ApiResponse<BookingCreatedResponse>>) {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(format_validation_errors(
                &validation_errors,
            ))),
        );
    }

    if !req.selection.is_valid() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(
                "Select one C session, one D session, or both an A and a B session",
            )),
        );
    }

    let details = UserDetails {
        name: req.name,
        phone: req.phone,
        email: req.email,
        student_id: req.student_id,
    };

    match Booking::submit(state.db(), &req.selection, &details, &claims.sub).await {
        Ok(booking) => {
            // Push the fresh snapshot to every live subscriber.
            emit_slots_snapshot(&state).await;

            (
                StatusCode::CREATED,
                Json(ApiResponse::success(
                    BookingCreatedResponse {
                        id: booking.id,
                        slots: req.selection.slot_ids(),
                        created_at: booking.created_at.to_rfc3339(),
                    },
                    "Booking confirmed",
                )),
            )
        }
        Err(e @ BookingError::NoSessionsSelected) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(e.to_string())),
        ),
        Err(e @ BookingError::SlotNotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(e.to_string())),
        ),
        Err(e @ BookingError::SlotFull { .. }) => (
            StatusCode::CONFLICT,
            Json(ApiResponse::error(e.to_string())),
        ),
        Err(BookingError::Db(e)) => {
            tracing::error!(error = %e, "Booking transaction failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Booking failed, please try again")),
            )
        }
    }
}
