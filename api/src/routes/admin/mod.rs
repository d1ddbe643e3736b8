use axum::{Router, middleware::from_fn, routing::get};
use common::state::AppState;

pub mod get;

pub use get::recent_logs;

use crate::auth::guards::allow_admin;

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/logs", get(recent_logs))
        .route_layer(from_fn(allow_admin))
}
