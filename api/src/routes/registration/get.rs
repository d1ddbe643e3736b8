use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use common::state::AppState;
use db::models::registration_config;
use db::window::{self, Countdown, WindowStatus};
use serde::Serialize;

use crate::response::ApiResponse;

#[derive(Debug, Serialize)]
pub struct RegistrationStatusResponse {
    pub status: WindowStatus,
    pub open_time: String,
    pub close_time: String,
    pub manual_override: bool,
    pub is_manually_open: bool,
    /// Present only while the window has not opened yet.
    pub countdown: Option<Countdown>,
}

impl Default for RegistrationStatusResponse {
    fn default() -> Self {
        Self {
            status: WindowStatus::Closed,
            open_time: String::new(),
            close_time: String::new(),
            manual_override: false,
            is_manually_open: false,
            countdown: None,
        }
    }
}

/// GET /registration/status
///
/// Effective window status for the current instant, with the countdown to
/// opening while the status is `before`. Clients poll at least once per
/// second to drive the countdown display; the decomposition is recomputed
/// from the instants on every call.
///
/// When the shared config cannot be read the endpoint fails closed (`503`):
/// attendees are not admitted on an unknown window, while admin tokens
/// bypass this gate entirely on the client side.
pub async fn registration_status(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<RegistrationStatusResponse>>) {
    let config = match registration_config::Model::get_or_default(state.db()).await {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load registration config");
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse::error(
                    "Registration settings are currently unavailable",
                )),
            );
        }
    };

    let now = Utc::now();
    let status = window::status(&config, now);
    let countdown = match status {
        WindowStatus::Before => window::countdown(config.open_time, now),
        _ => None,
    };

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            RegistrationStatusResponse {
                status,
                open_time: config.open_time.to_rfc3339(),
                close_time: config.close_time.to_rfc3339(),
                manual_override: config.manual_override,
                is_manually_open: config.is_manually_open,
                countdown,
            },
            "Registration status computed",
        )),
    )
}
