use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use common::state::AppState;

pub mod get;
pub mod post;

pub use get::list_bookings;
pub use post::submit_booking;

use crate::auth::guards::{allow_admin, allow_authenticated};

pub fn bookings_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(submit_booking).route_layer(from_fn(allow_authenticated)),
        )
        .route("/", get(list_bookings).route_layer(from_fn(allow_admin)))
}
