//! API route handlers

pub mod chain;
pub mod chronos;
pub mod health;
pub mod tokens;

use axum::{routing::get, Router};

use crate::AppState;

/// Create the API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/chain", chain::router())
        .nest("/chronos", chronos::router())
        .nest("/tokens", tokens::router())
        .with_state(state)
}
