// src/deck/mod.rs
//! Slide-deck model and PowerPoint rendering.
//!
//! A [`Deck`] is built from the parsed slide records and encoded as a minimal
//! Office Open XML presentation by [`Deck::to_pptx`].

mod package;
mod xml;

use chrono::{DateTime, Utc};

use crate::error::AppError;
use crate::models::SlideRecord;

pub use package::PPTX_CONTENT_TYPE;

/// Subtitle placed under the upper-cased title on the cover slide.
pub const COVER_SUBTITLE: &str = "Generated by AI";

/// English Metric Units per typographic point.
pub const EMU_PER_PT: i64 = 12_700;

/// Font size of the content paragraphs, in points.
pub const CONTENT_FONT_PT: u32 = 18;
/// Font size of the references text box, in points.
pub const REFERENCES_FONT_PT: u32 = 12;

/// Geometry of the references text box, in points.
pub const REFERENCES_LEFT_PT: i64 = 50;
pub const REFERENCES_TOP_PT: i64 = 450;
pub const REFERENCES_WIDTH_PT: i64 = 860;
pub const REFERENCES_HEIGHT_PT: i64 = 100;

/// Prefix written before the references text.
pub const REFERENCES_PREFIX: &str = "- ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckSlide {
    /// "Title Slide" layout.
    Cover { title: String, subtitle: String },
    /// "Title and Content" layout.
    Content {
        header: Option<String>,
        body: Option<String>,
        references: Option<String>,
    },
}

impl DeckSlide {
    fn from_record(record: &SlideRecord) -> Self {
        DeckSlide::Content {
            header: record.header().map(str::to_string),
            body: record.content().map(str::to_string),
            references: record
                .references()
                .map(|refs| format!("{}{}", REFERENCES_PREFIX, refs)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Deck {
    title: String,
    slides: Vec<DeckSlide>,
    created_at: DateTime<Utc>,
}

impl Deck {
    /// Builds the cover slide followed by one slide per record, in order.
    /// Any number of records is accepted, including none.
    pub fn build(title: &str, records: &[SlideRecord]) -> Self {
        let mut slides = Vec::with_capacity(records.len() + 1);
        slides.push(DeckSlide::Cover {
            title: title.to_uppercase(),
            subtitle: COVER_SUBTITLE.to_string(),
        });
        slides.extend(records.iter().map(DeckSlide::from_record));

        Self {
            title: title.to_string(),
            slides,
            created_at: Utc::now(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slides(&self) -> &[DeckSlide] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Encodes the deck as `.pptx` bytes.
    pub fn to_pptx(&self) -> Result<Vec<u8>, AppError> {
        package::write_package(self)
    }
}
