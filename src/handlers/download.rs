// src/handlers/download.rs
use axum::{
    extract::{Extension, Path},
    http::{header, StatusCode},
    response::Response,
    routing::get,
    Router,
};
use std::sync::Arc;
use tokio_util::io::ReaderStream;

use crate::deck::PPTX_CONTENT_TYPE;
use crate::error::AppError;
use crate::AppState;

pub fn download_routes() -> Router {
    Router::new().route("/download/*path", get(download_presentation))
}

/// GET /download/*path - stream a stored deck as an attachment
pub async fn download_presentation(
    Path(key): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Response, AppError> {
    let file_path = state.presentations.storage().resolve(&key).await?;

    let file = tokio::fs::File::open(&file_path).await?;
    let size = file.metadata().await?.len();
    let stream = ReaderStream::new(file);

    let filename = file_path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("presentation.pptx");

    tracing::debug!(key = %key, bytes = size, "serving presentation");

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, PPTX_CONTENT_TYPE)
        .header(header::CONTENT_LENGTH, size)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(axum::body::Body::from_stream(stream))
        .map_err(|e| AppError::Render(format!("Failed to build download response: {}", e)))
}
