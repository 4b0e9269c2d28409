//! HTTP server setup and configuration

use std::net::SocketAddr;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::routes::create_router;
use crate::AppState;

/// Create the full application router with middleware
pub fn create_app(state: AppState) -> Router {
    // The dApp is served from a different origin than the API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Start the HTTP server on the configured address
pub async fn start_server(state: AppState) -> Result<(), std::io::Error> {
    let addr: SocketAddr = state.config().await.api_addr();
    if !addr.ip().is_loopback() {
        tracing::warn!(%addr, "API is reachable from outside this host");
    }
    let app = create_app(state);

    tracing::info!("Starting Helios API on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
