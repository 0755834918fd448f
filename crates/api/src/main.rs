use std::net::SocketAddr;
use std::sync::Arc;

use pedalstock_core::catalog::Catalog;
use pedalstock_core::storage::KeyValueStore;
use pedalstock_db::session::Session;
use pedalstock_db::stores::{MemoryStore, PgKeyValueStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pedalstock_api::config::ServerConfig;
use pedalstock_api::router::build_app_router;
use pedalstock_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "pedalstock_api=debug,pedalstock_db=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Catalog ---
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_file(path).expect("Failed to load catalog"),
        None => Catalog::pedal_parts(),
    };
    tracing::info!(
        categories = catalog.categories().len(),
        components = catalog.len(),
        "Catalog loaded",
    );

    // --- Storage ---
    let store: Arc<dyn KeyValueStore> = match &config.database_url {
        Some(database_url) => {
            let pool = pedalstock_db::create_pool(database_url)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            pedalstock_db::health_check(&pool)
                .await
                .expect("Database health check failed");

            pedalstock_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            Arc::new(PgKeyValueStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, inventory is kept in memory only");
            Arc::new(MemoryStore::new())
        }
    };

    // --- Session ---
    let session = Session::hydrate(store, Arc::new(catalog)).await;
    let state = AppState::new(session, config.clone());

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
