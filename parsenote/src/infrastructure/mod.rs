// src/infrastructure/mod.rs
pub mod encoding;
pub mod xml;

pub use xml::{parse_note_file, parse_note_reader, parse_note_str, XmlNoteSource};
