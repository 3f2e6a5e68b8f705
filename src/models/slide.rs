use serde::{Deserialize, Serialize};

/// One slide as returned by the generation service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideRecord {
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub references: Option<String>,
}

impl SlideRecord {
    pub fn header(&self) -> Option<&str> {
        non_empty(&self.header)
    }

    pub fn content(&self) -> Option<&str> {
        non_empty(&self.content)
    }

    pub fn references(&self) -> Option<&str> {
        non_empty(&self.references)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Top-level shape of the model's answer.
#[derive(Debug, Deserialize)]
pub struct SlideDeckPayload {
    pub slides: Vec<SlideRecord>,
}

#[derive(Debug, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub message: String,
    pub download_link: String,
}
