use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use common::state::AppState;
use db::models::admin_log;
use serde::{Deserialize, Serialize};

use crate::response::ApiResponse;

const DEFAULT_LIMIT: u64 = 20;

#[derive(Debug, Deserialize)]
pub struct LogsQuery {
    pub limit: Option<u64>,
}

#[derive(Debug, Serialize, Default)]
pub struct AdminLogEntry {
    pub id: i64,
    pub action: String,
    pub status: String,
    pub details: String,
    pub user_agent: Option<String>,
    pub created_at: String,
}

/// GET /admin/logs?limit=N
///
/// Most recent audit entries, newest first. `limit` defaults to 20.
pub async fn recent_logs(
    State(state): State<AppState>,
    Query(query): Query<LogsQuery>,
) -> (StatusCode, Json<ApiResponse<Vec<AdminLogEntry>>>) {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

    match admin_log::Model::recent(state.db(), limit).await {
        Ok(rows) => {
            let entries = rows
                .into_iter()
                .map(|row| AdminLogEntry {
                    id: row.id,
                    action: row.action,
                    status: row.status,
                    details: row.details,
                    user_agent: row.user_agent,
                    created_at: row.created_at.to_rfc3339(),
                })
                .collect();

            (
                StatusCode::OK,
                Json(ApiResponse::success(entries, "Audit log fetched")),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to fetch audit log: {e}"))),
        ),
    }
}
