use axum::{Router, middleware::from_fn, routing::get, routing::post};
use common::state::AppState;

pub mod get;
pub mod post;

pub use get::last_reset;
pub use post::reset_event;

use crate::auth::guards::allow_admin;

pub fn system_routes() -> Router<AppState> {
    Router::new()
        .route("/last-reset", get(last_reset))
        .route("/reset", post(reset_event).route_layer(from_fn(allow_admin)))
}
