// src/error.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("Generation service error: {0}")]
    Upstream(String),
    #[error("Unable to parse the response from the generation service: {0}")]
    Parse(String),
    #[error("Failed to build prompt: {0}")]
    Prompt(String),
    #[error("Failed to render presentation: {0}")]
    Render(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Not found")]
    NotFound,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Upstream(_)
            | AppError::Parse(_)
            | AppError::Prompt(_)
            | AppError::Render(_)
            | AppError::Io(_)
            | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the client. Server-side failures use fixed wording;
    /// the detailed message only goes to the log.
    fn public_message(&self) -> String {
        match self {
            AppError::Upstream(_) => "Generation service request failed".to_string(),
            AppError::Parse(_) => {
                "Unable to parse the response from the generation service".to_string()
            }
            AppError::Prompt(_) => "Failed to build the generation prompt".to_string(),
            AppError::Database(_) => "Failed to access presentation history".to_string(),
            AppError::Io(_) => "Failed to store presentation".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<zip::result::ZipError> for AppError {
    fn from(err: zip::result::ZipError) -> Self {
        AppError::Render(err.to_string())
    }
}

impl From<std::fmt::Error> for AppError {
    fn from(err: std::fmt::Error) -> Self {
        AppError::Render(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, status = %status.as_u16(), "request rejected");
        }

        (
            status,
            Json(ErrorResponse {
                error: self.public_message(),
            }),
        )
            .into_response()
    }
}
