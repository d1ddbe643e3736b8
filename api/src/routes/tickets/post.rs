use axum::{Json, extract::State, http::StatusCode};
use common::state::AppState;
use db::models::registration_config;
use db::ticket::{self, DeviceTicket, Disposition, ResetCheck};
use serde::Serialize;

use crate::response::ApiResponse;

#[derive(Debug, Serialize, Default)]
pub struct TicketVerdict {
    /// Whether the ticket still refers to live data. Advisory only.
    pub valid: bool,
}

/// POST /tickets/verify
///
/// Checks a locally held device ticket against the reset marker. A ticket
/// issued strictly before the most recent reset refers to wiped bookings and
/// gets `valid: false`; everything else keeps it. When the marker cannot be
/// read the client is told to keep the ticket rather than discard a possibly
/// live reservation.
pub async fn verify_ticket(
    State(state): State<AppState>,
    Json(ticket): Json<DeviceTicket>,
) -> (StatusCode, Json<ApiResponse<TicketVerdict>>) {
    let check = match registration_config::Model::last_reset(state.db()).await {
        Ok(at) => ResetCheck::Known(at),
        Err(e) => {
            tracing::warn!(error = %e, "Reset marker unavailable, keeping ticket");
            ResetCheck::Unavailable
        }
    };

    let valid = ticket::disposition(&ticket, check) == Disposition::Keep;

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            TicketVerdict { valid },
            "Ticket checked",
        )),
    )
}
