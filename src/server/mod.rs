//! HTTP surface: the media proxy endpoint.

mod handlers;
mod response;

pub use handlers::MediaQuery;
pub use response::{
    ApiError, FETCH_FAILED_MESSAGE, MISSING_PARAMETERS_MESSAGE, UPSTREAM_FAILURE_CODE,
};

use crate::classifier::MediaFetcher;
use crate::error::AppError;
use axum::{http::Method, routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

/// Shared, read-only request state.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<MediaFetcher>,
}

impl AppState {
    pub fn new(fetcher: MediaFetcher) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    // The widget is embedded on other origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/api/media", get(handlers::get_media))
        .route("/health", get(handlers::health))
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state)
}

/// Binds `addr` and serves until SIGINT or SIGTERM.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                log::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => log::info!("Received SIGINT, shutting down"),
        () = terminate => log::info!("Received SIGTERM, shutting down"),
    }
}
