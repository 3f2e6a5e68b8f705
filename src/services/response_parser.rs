// src/services/response_parser.rs
use crate::error::AppError;
use crate::models::{SlideDeckPayload, SlideRecord};

/// Extracts the ordered slide records from raw completion text.
///
/// The text must be a JSON object with a `slides` array. Anything else,
/// including slides whose fields are not strings, is a parse error.
pub fn parse_slides(raw: &str) -> Result<Vec<SlideRecord>, AppError> {
    let payload: SlideDeckPayload = serde_json::from_str(raw.trim()).map_err(|e| {
        tracing::warn!(error = %e, response_len = raw.len(), "generation response rejected");
        AppError::Parse(e.to_string())
    })?;

    tracing::debug!(slides = payload.slides.len(), "parsed generation response");
    Ok(payload.slides)
}
