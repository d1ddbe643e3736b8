use axum::{Router, routing::post};
use common::state::AppState;

pub mod post;

pub use post::{admin_login, create_session};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/session", post(create_session))
        .route("/admin", post(admin_login))
}
