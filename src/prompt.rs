// src/prompt.rs
//! Builds the instruction sent to the generation service.
//!
//! The prompt is a small JSON document: the natural-language question sits in
//! `"input text"` and `"json structure"` shows the shape the answer must take.

use serde::Serialize;

use crate::error::AppError;

/// Number of content slides requested from the model.
pub const REQUESTED_SLIDE_COUNT: usize = 10;

#[derive(Serialize)]
struct PromptTemplate<'a> {
    #[serde(rename = "input text")]
    input_text: String,
    output_format: &'a str,
    #[serde(rename = "json structure")]
    json_structure: JsonStructure<'a>,
}

#[derive(Serialize)]
struct JsonStructure<'a> {
    slides: SlideSchema<'a>,
}

#[derive(Serialize)]
struct SlideSchema<'a> {
    header: &'a str,
    content: &'a str,
    references: &'a str,
}

pub fn build_question(title: &str) -> String {
    format!(
        "Generate a {}-slide presentation for the topic '{}'. Each slide should have a header, detailed content, and references. Return as JSON.",
        REQUESTED_SLIDE_COUNT, title
    )
}

/// Renders the full prompt for `title` as 4-space indented JSON.
pub fn build_prompt(title: &str) -> Result<String, AppError> {
    let template = PromptTemplate {
        input_text: build_question(title),
        output_format: "json",
        json_structure: JsonStructure {
            slides: SlideSchema {
                header: "string",
                content: "string",
                references: "string",
            },
        },
    };

    let mut buf = Vec::with_capacity(512);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    template
        .serialize(&mut serializer)
        .map_err(|e| AppError::Prompt(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| AppError::Prompt(e.to_string()))
}
