// src/handlers/status.rs
use axum::{extract::Extension, response::Json, routing::get, Router};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::AppState;

pub fn status_routes() -> Router {
    Router::new().route("/api/status", get(api_status))
}

/// GET /api/status - health summary
pub async fn api_status(Extension(state): Extension<Arc<AppState>>) -> Json<Value> {
    let db_status = match state.presentations.history().ping().await {
        Ok(_) => "healthy",
        Err(e) => {
            tracing::warn!("History store health check failed: {}", e);
            "unhealthy"
        }
    };

    Json(json!({
        "status": "operational",
        "version": env!("CARGO_PKG_VERSION"),
        "services": {
            "database": db_status,
            "generation_model": state.presentations.generator().model_name(),
        },
        "endpoints": {
            "index": "/",
            "generate": "/generate",
            "download": "/download/{key}",
            "search": "/search?query=",
            "status": "/api/status"
        }
    }))
}
