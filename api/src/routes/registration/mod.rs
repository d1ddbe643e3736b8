use axum::{Router, middleware::from_fn, routing::get, routing::put};
use common::state::AppState;

pub mod get;
pub mod put;

pub use get::registration_status;
pub use put::update_window;

use crate::auth::guards::allow_admin;

pub fn registration_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(registration_status))
        .route("/window", put(update_window).route_layer(from_fn(allow_admin)))
}
