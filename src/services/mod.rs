// src/services/mod.rs
pub mod generation;
pub mod history;
pub mod presentation;
pub mod response_parser;

pub use generation::TextGenerator;
pub use history::{HistoryStore, PgHistoryStore};
pub use presentation::PresentationService;
