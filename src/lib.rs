// lib.rs - AI slide-deck generator: HTTP surface, pipeline and rendering
pub mod config;
pub mod db;
pub mod deck;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod openai_client;
pub mod prompt;
pub mod services;
pub mod storage;

use axum::{Extension, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::services::PresentationService;

/// Shared state handed to every handler.
pub struct AppState {
    pub presentations: PresentationService,
    /// Prefix for download links; derived from the `Host` header when unset.
    pub public_base_url: Option<String>,
}

/// Builds the application router with all routes and layers.
pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(handlers::ui::ui_routes())
        .merge(handlers::presentation::presentation_routes())
        .merge(handlers::download::download_routes())
        .merge(handlers::status::status_routes())
        .layer(axum::middleware::from_fn(
            middleware::logging::request_logging_middleware,
        ))
        .layer(CorsLayer::permissive())
        .layer(Extension(state))
}
