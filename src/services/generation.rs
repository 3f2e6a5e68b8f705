// src/services/generation.rs
use async_trait::async_trait;

use crate::error::AppError;

/// Anything that can turn a prompt into completion text.
///
/// The pipeline only depends on this trait, so the blocking HTTP client can be
/// replaced by a queued or cached implementation without touching it.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AppError>;

    /// Model identifier reported by the status endpoint.
    fn model_name(&self) -> &str;
}
