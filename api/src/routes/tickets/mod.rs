use axum::{Router, routing::post};
use common::state::AppState;

pub mod post;

pub use post::verify_ticket;

pub fn tickets_routes() -> Router<AppState> {
    Router::new().route("/verify", post(verify_ticket))
}
