//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → Health check endpoint (public)
//! - `/auth` → Anonymous session minting and admin login (public)
//! - `/slots` → Session slot snapshot (public)
//! - `/bookings` → Booking submission (authenticated) and export (admin)
//! - `/registration` → Window status (public) and window control (admin)
//! - `/system` → Last-reset timestamp (public) and full reset (admin)
//! - `/tickets` → Device ticket verification (public)
//! - `/admin` → Audit log access (admin-only)

use axum::Router;
use common::state::AppState;

pub mod admin;
pub mod auth;
pub mod bookings;
pub mod health;
pub mod registration;
pub mod slots;
pub mod system;
pub mod tickets;

/// Builds the complete application router for all HTTP endpoints.
///
/// The returned router mounts all core API routes under their respective
/// base paths; access control is applied per route group.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health::health_routes())
        .nest("/auth", auth::auth_routes())
        .nest("/slots", slots::slots_routes())
        .nest("/bookings", bookings::bookings_routes())
        .nest("/registration", registration::registration_routes())
        .nest("/system", system::system_routes())
        .nest("/tickets", tickets::tickets_routes())
        .nest("/admin", admin::admin_routes())
        .with_state(app_state)
}
