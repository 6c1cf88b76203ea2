//! Application startup and lifecycle management.
//!
//! `Application::build` resolves the store, runs the seed step, and binds the
//! listener. Requests are only served once `run_until_stopped` is called, so
//! seeding has always finished (or been abandoned) by then.

use crate::config::CatalogConfig;
use crate::handlers;
use crate::services::{seed_products_if_needed, CatalogService, CatalogStore, MongoDb};
use axum::{middleware::from_fn, routing::get, Router};
use service_core::error::AppError;
use service_core::middleware::request_id_middleware;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: CatalogConfig,
    pub catalog: CatalogService,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/hello", get(handlers::hello))
        .route("/api/products", get(handlers::list_products))
        .route("/api/products/:product_id", get(handlers::get_product))
        .route("/test", get(handlers::diagnostics))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Connects to MongoDB when configured. A client that cannot be created is
/// logged and treated as "not configured" so startup never fails on it.
async fn connect_store(config: &CatalogConfig) -> Option<Arc<dyn CatalogStore>> {
    let Some(mongo) = config.mongodb.as_ref() else {
        tracing::warn!("DATABASE_URL or DATABASE_NAME not set; catalog store is not configured");
        return None;
    };
    match MongoDb::connect(&mongo.uri, &mongo.database).await {
        Ok(db) => Some(Arc::new(db)),
        Err(e) => {
            tracing::error!("Catalog store unavailable, serving without it: {}", e);
            None
        }
    }
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the configured MongoDB store.
    pub async fn build(config: CatalogConfig) -> Result<Self, AppError> {
        let store = connect_store(&config).await;
        Self::build_with_store(config, store).await
    }

    /// Build the application over an explicit store (`None` = not
    /// configured).
    pub async fn build_with_store(
        config: CatalogConfig,
        store: Option<Arc<dyn CatalogStore>>,
    ) -> Result<Self, AppError> {
        seed_products_if_needed(store.as_deref()).await;

        let state = AppState {
            config: config.clone(),
            catalog: CatalogService::new(store),
        };

        // Port 0 = random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Catalog service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Serve until SIGINT/SIGTERM.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);
        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
