//! HTTP API server

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::catalog::Catalog;

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/albums",
            get(handlers::list_albums).post(handlers::create_album),
        )
        .route("/albums/:id", get(handlers::get_album))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Convenience helper for serving an existing catalog
pub fn create_catalog_router(catalog: Arc<Catalog>) -> Router {
    create_router(AppState::new(catalog))
}
