use api::routes::routes;
use api::ws::ws_routes;
use axum::Router;
use common::{config, state::AppState, ws::WebSocketManager};
use db::{connect, seeders};
use migration::Migrator;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing_appender::rolling;

#[tokio::main]
async fn main() {
    // Load configuration and initialize logging
    let _log_guard = init_logging(&config::log_file(), &config::log_level());

    // Set up dependencies
    let db = connect().await;
    Migrator::up(&db, None).await.expect("Migration failed");
    ensure_seeded(&db).await;

    let app_state = AppState::new(db, WebSocketManager::new());

    // Configure middleware
    let cors = CorsLayer::very_permissive();

    // Build app router
    let app = Router::new()
        .nest("/api", routes(app_state.clone()))
        .nest("/ws", ws_routes(app_state.clone()))
        .layer(cors);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config::host(), config::port())
        .parse()
        .expect("Invalid address");

    println!(
        "Starting {} on http://{}:{}",
        config::project_name(),
        config::host(),
        config::port()
    );

    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Server crashed");
}

/// First boot on an empty database gets the fixed slot catalog and the
/// default registration window. Existing data is left untouched.
async fn ensure_seeded(db: &DatabaseConnection) {
    if let Err(e) = seeders::ensure_default_config(db).await {
        tracing::error!(error = %e, "Failed to ensure registration config");
    }

    match db::models::session_slot::Model::find_all_ordered(db).await {
        Ok(slots) if slots.is_empty() => {
            if let Err(e) = seeders::seed_slots(db).await {
                tracing::error!(error = %e, "Failed to seed session slots");
            } else {
                tracing::info!("Seeded session slot catalog");
            }
        }
        Ok(_) => {}
        Err(e) => tracing::error!(error = %e, "Failed to inspect session slots"),
    }
}

fn init_logging(log_file: &str, log_level: &str) -> tracing_appender::non_blocking::WorkerGuard {
    use std::fs;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    fs::create_dir_all("logs").ok();

    let file_appender = rolling::daily("logs", log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let log_to_stdout = config::log_to_stdout();

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true)
        .with_thread_ids(true);

    let env_filter =
        EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(log_level));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    if log_to_stdout {
        registry.with(stdout_layer).init();
    } else {
        registry.init();
    }

    guard
}
