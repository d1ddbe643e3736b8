use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header::USER_AGENT},
};
use common::{config, state::AppState};
use db::models::admin_log::{self, actions};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::generate_jwt;
use crate::response::ApiResponse;

#[derive(Debug, Serialize, Default)]
pub struct SessionResponse {
    pub user_id: String,
    pub token: String,
    pub expires_at: String,
}

/// POST /auth/session
///
/// Mints a stable anonymous session identity. Every booking submission
/// requires one of these tokens; no personal information is collected here.
///
/// ### Responses
///
/// - `201 Created`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "user_id": "7f9c2ba4-...",
///     "token": "jwt_token_here",
///     "expires_at": "2026-02-06T11:00:00Z"
///   },
///   "message": "Session created"
/// }
/// ```
pub async fn create_session() -> (StatusCode, Json<ApiResponse<SessionResponse>>) {
    let user_id = Uuid::new_v4().to_string();

    match generate_jwt(user_id.clone(), false) {
        Ok((token, expires_at)) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                SessionResponse {
                    user_id,
                    token,
                    expires_at: expires_at.to_rfc3339(),
                },
                "Session created",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to sign token: {e}"))),
        ),
    }
}

#[derive(Debug, Deserialize)]
pub struct AdminLoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize, Default)]
pub struct AdminLoginResponse {
    pub token: String,
    pub expires_at: String,
}

/// POST /auth/admin
///
/// Shared-secret admin login. Success and failure are both recorded in the
/// audit log. This is a soft gate; the secret lives in server configuration.
///
/// ### Request Body
/// ```json
/// { "password": "..." }
/// ```
///
/// ### Responses
///
/// - `200 OK` with an admin token
/// - `401 Unauthorized` on a wrong password
pub async fn admin_login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<AdminLoginRequest>,
) -> (StatusCode, Json<ApiResponse<AdminLoginResponse>>) {
    let db = state.db();
    let user_agent = headers.get(USER_AGENT).and_then(|v| v.to_str().ok());

    if req.password != config::admin_password() {
        admin_log::Model::record(
            db,
            actions::LOGIN_FAILURE,
            admin_log::STATUS_FAILURE,
            "Wrong admin password",
            user_agent,
        )
        .await;

        return (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Invalid admin password")),
        );
    }

    match generate_jwt("admin".to_string(), true) {
        Ok((token, expires_at)) => {
            admin_log::Model::record(
                db,
                actions::LOGIN,
                admin_log::STATUS_SUCCESS,
                "Admin login",
                user_agent,
            )
            .await;

            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    AdminLoginResponse {
                        token,
                        expires_at: expires_at.to_rfc3339(),
                    },
                    "Admin authenticated",
                )),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to sign token: {e}"))),
        ),
    }
}
