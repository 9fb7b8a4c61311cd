// src/ports/text.rs
use crate::constants::{AUTHOR_FIELD, CONTENT_FIELD, DATE_FIELD, NOTE_FIELDS};
use crate::domain::{DomainError, Note};
use std::io::Write;
use tracing::instrument;

/// Renders a note as the one-line `Note from ... -->  ...` summary.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Fails with [`DomainError::MissingField`] naming the first of
    /// author, date, content that the note lacks. A field that is present
    /// without text renders as an empty string.
    #[instrument(level = "debug", skip(self), ret)]
    pub fn render(&self, note: &Note) -> Result<String, DomainError> {
        if let Some(missing) = NOTE_FIELDS.iter().find(|name| !note.contains_key(name)) {
            return Err(DomainError::MissingField(missing.to_string()));
        }

        let field = |name: &str| note.get(name).flatten().unwrap_or_default();
        Ok(format!(
            "Note from {} ({})  -->  {}",
            field(AUTHOR_FIELD),
            field(DATE_FIELD),
            field(CONTENT_FIELD)
        ))
    }

    /// Render `note` and write it as a single line to `out`.
    pub fn print<W: Write>(&self, note: &Note, out: &mut W) -> anyhow::Result<()> {
        let line = self.render(note)?;
        writeln!(out, "{}", line)?;
        Ok(())
    }
}
