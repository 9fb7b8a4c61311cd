// src/ports/json.rs
use crate::domain::Note;
use anyhow::{Context, Result};

/// Pretty-printed JSON object of all fields, `null` for fields without text.
pub fn render_json(note: &Note) -> Result<String> {
    serde_json::to_string_pretty(note).context("Failed to serialize note to JSON")
}
