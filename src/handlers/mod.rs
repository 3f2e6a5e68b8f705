// src/handlers/mod.rs
pub mod download;
pub mod presentation;
pub mod status;
pub mod ui;
