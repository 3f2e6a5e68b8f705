pub mod history;
pub mod slide;

pub use history::{PresentationHistoryEntry, SearchQuery};
pub use slide::{GenerateResponse, GenerationRequest, SlideDeckPayload, SlideRecord};
