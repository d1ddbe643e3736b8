use std::sync::Once;

use axum::{Router, body::Body, response::Response};
use common::config::AppConfig;
use common::state::AppState;
use common::ws::WebSocketManager;
use sea_orm::DatabaseConnection;
use serde_json::Value;

use api::auth::generate_jwt;
use api::routes::routes;
use api::ws::ws_routes;
use db::seeders;
use db::test_utils::setup_test_db;

pub const TEST_ADMIN_PASSWORD: &str = "correct horse battery staple";

static ENV_SETUP: Once = Once::new();

/// The config singleton loads from the environment on first touch, so the
/// required variables must exist before any accessor runs.
fn setup_env() {
    ENV_SETUP.call_once(|| {
        unsafe {
            std::env::set_var("DATABASE_PATH", "sqlite::memory:");
            std::env::set_var("JWT_SECRET", "test-secret");
            std::env::set_var("ADMIN_PASSWORD", TEST_ADMIN_PASSWORD);
        }
        AppConfig::set_jwt_secret("test-secret");
        AppConfig::set_admin_password(TEST_ADMIN_PASSWORD);
    });
}

/// Fresh in-memory database with the slot catalog and default window seeded,
/// wrapped in the full `/api` + `/ws` router.
pub async fn make_test_app() -> (Router, DatabaseConnection) {
    setup_env();

    let db = setup_test_db().await;
    seeders::seed_slots(&db)
        .await
        .expect("Failed to seed slots");
    seeders::ensure_default_config(&db)
        .await
        .expect("Failed to seed registration config");

    let app_state = AppState::new(db.clone(), WebSocketManager::new());
    let app = Router::new()
        .nest("/api", routes(app_state.clone()))
        .nest("/ws", ws_routes(app_state));

    (app, db)
}

pub fn user_token(sub: &str) -> String {
    setup_env();
    let (token, _) = generate_jwt(sub.to_string(), false).expect("Failed to mint token");
    token
}

pub fn admin_token() -> String {
    setup_env();
    let (token, _) = generate_jwt("admin".to_string(), true).expect("Failed to mint token");
    token
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body was not JSON")
}
