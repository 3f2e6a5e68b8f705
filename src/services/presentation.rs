// src/services/presentation.rs
//! Title in, downloadable deck out.

use std::sync::Arc;

use crate::deck::Deck;
use crate::error::AppError;
use crate::models::{GenerateResponse, PresentationHistoryEntry};
use crate::prompt::build_prompt;
use crate::services::generation::TextGenerator;
use crate::services::history::HistoryStore;
use crate::services::response_parser::parse_slides;
use crate::storage::DeckStorage;

pub const SUCCESS_MESSAGE: &str = "Presentation created successfully";

#[derive(Clone)]
pub struct PresentationService {
    generator: Arc<dyn TextGenerator>,
    history: Arc<dyn HistoryStore>,
    storage: DeckStorage,
}

impl PresentationService {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        history: Arc<dyn HistoryStore>,
        storage: DeckStorage,
    ) -> Self {
        Self {
            generator,
            history,
            storage,
        }
    }

    pub fn storage(&self) -> &DeckStorage {
        &self.storage
    }

    pub fn history(&self) -> &Arc<dyn HistoryStore> {
        &self.history
    }

    pub fn generator(&self) -> &Arc<dyn TextGenerator> {
        &self.generator
    }

    /// Runs the whole pipeline for one title.
    ///
    /// `base_url` must end with `/`; the download link is
    /// `{base_url}download/{key}`. Nothing is recorded in the history unless
    /// the file was written.
    pub async fn generate(
        &self,
        title: Option<&str>,
        base_url: &str,
    ) -> Result<GenerateResponse, AppError> {
        let title = title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Validation("Title is required".to_string()))?;

        tracing::info!(title = %title, "generating presentation");

        let prompt = build_prompt(title)?;
        let raw = self.generator.generate(&prompt).await?;
        let records = parse_slides(&raw)?;

        let deck = Deck::build(title, &records);
        let bytes = deck.to_pptx()?;
        let stored = self.storage.store(title, &bytes).await?;

        let download_link = format!("{}download/{}", base_url, encode_key(&stored.key));
        self.history.create(title, &download_link).await?;

        tracing::info!(
            title = %title,
            slides = deck.slide_count(),
            key = %stored.key,
            "presentation generated"
        );

        Ok(GenerateResponse {
            message: SUCCESS_MESSAGE.to_string(),
            download_link,
        })
    }

    pub async fn history_entries(
        &self,
        filter: Option<&str>,
    ) -> Result<Vec<PresentationHistoryEntry>, AppError> {
        self.history.list(filter).await
    }
}

/// Percent-encodes each segment of a storage key for use in a URL path.
fn encode_key(key: &str) -> String {
    key.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
