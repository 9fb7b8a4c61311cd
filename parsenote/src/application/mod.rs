// src/application/mod.rs
pub mod note_reader;

pub use note_reader::{NoteReader, NoteSource};
