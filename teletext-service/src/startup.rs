//! Application wiring: shared state, router and server lifecycle.

use crate::config::{DatabaseConfig, TeletextConfig};
use crate::handlers;
use crate::services::{DocumentStore, MongoStore, StoreHandle};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{metrics_middleware, request_id_middleware};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: TeletextConfig,
    pub store: StoreHandle,
}

impl AppState {
    /// The store, or a database error when none is configured.
    pub fn store(&self) -> Result<&dyn DocumentStore, AppError> {
        self.store
            .as_deref()
            .ok_or_else(|| AppError::DatabaseError(anyhow::anyhow!("Database not available")))
    }
}

/// Build the MongoDB store when both connection settings are present.
///
/// A missing setting or a client that cannot be built leaves the service
/// running without a store; `/test` reports why.
pub async fn connect_store(database: &DatabaseConfig) -> StoreHandle {
    let Some((url, name)) = database.connection() else {
        tracing::warn!("DATABASE_URL or DATABASE_NAME not set, running without a database");
        return None;
    };

    match MongoStore::connect(url, name).await {
        Ok(store) => Some(Arc::new(store)),
        Err(e) => {
            tracing::error!("Failed to initialize MongoDB store: {}", e);
            None
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::service_info))
        .route("/test", get(handlers::database_diagnostics))
        .route("/seed/plans", post(handlers::seed_plans))
        .route("/plans", get(handlers::list_plans))
        .route("/lead", post(handlers::create_lead))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route_layer(middleware::from_fn(metrics_middleware))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors_layer())
        .with_state(state)
}

/// Any origin may call the API with credentials: the request's origin,
/// method and headers are echoed back instead of `*`, which browsers reject
/// on credentialed requests.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Connect the store from configuration, then bind.
    pub async fn build(config: TeletextConfig) -> Result<Self, AppError> {
        let store = connect_store(&config.database).await;
        Self::with_store(config, store).await
    }

    /// Bind with an explicit store handle. Port 0 picks a free port.
    pub async fn with_store(config: TeletextConfig, store: StoreHandle) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let router = router(AppState { config, store });

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router).await
    }

    pub async fn run_with_shutdown<F>(self, signal: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(signal)
            .await
    }
}
