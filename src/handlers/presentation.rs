// src/handlers/presentation.rs
use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::{header, HeaderMap},
    response::Json,
    routing::post,
    Router,
};
use std::sync::Arc;

use crate::error::AppError;
use crate::models::{GenerateResponse, GenerationRequest};
use crate::AppState;

pub fn presentation_routes() -> Router {
    Router::new().route("/generate", post(generate_presentation))
}

/// POST /generate - build a deck for `{"title": ...}`
pub async fn generate_presentation(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        AppError::Validation(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let base_url = request_base_url(&state, &headers);
    let response = state
        .presentations
        .generate(request.title.as_deref(), &base_url)
        .await?;

    Ok(Json(response))
}

/// Prefix for download links: the configured public URL, or the request's
/// `Host` header like `request.host_url` would give.
pub fn request_base_url(state: &AppState, headers: &HeaderMap) -> String {
    if let Some(url) = &state.public_base_url {
        return url.clone();
    }

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .filter(|h| !h.is_empty())
        .unwrap_or("localhost");
    format!("http://{}/", host)
}
