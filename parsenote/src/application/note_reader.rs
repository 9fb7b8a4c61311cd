// src/application/note_reader.rs
use crate::domain::{DomainError, Note};
use std::path::Path;

pub trait NoteSource {
    /// Load and flatten the note stored at `path`
    fn load_note(&mut self, path: &Path) -> Result<Note, DomainError>;
}

pub struct NoteReader<S: NoteSource> {
    source: S,
}

impl<S: NoteSource> NoteReader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn read_note(&mut self, path: &Path) -> Result<Note, DomainError> {
        self.source.load_note(path)
    }
}
