use axum::{Router, routing::get};
use common::state::AppState;

pub mod get;

pub use get::list_slots;

pub fn slots_routes() -> Router<AppState> {
    Router::new().route("/", get(list_slots))
}
