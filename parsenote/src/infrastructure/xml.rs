// src/infrastructure/xml.rs
use super::encoding::decode_document;
use crate::application::NoteSource;
use crate::constants::{INLINE_ORIGIN, STREAM_ORIGIN};
use crate::domain::error::XmlError;
use crate::domain::{DomainError, Note};
use roxmltree::{Document, Node, ParsingOptions};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{debug, instrument, trace};

/// Reads notes from XML files on disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlNoteSource;

impl XmlNoteSource {
    pub fn new() -> Self {
        Self
    }
}

impl NoteSource for XmlNoteSource {
    fn load_note(&mut self, path: &Path) -> Result<Note, DomainError> {
        parse_note_file(path)
    }
}

/// Parse the XML file at `path` into a [`Note`].
///
/// The whole file is read up front and the handle is dropped before parsing
/// starts, so no descriptor outlives this call on any path.
#[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
pub fn parse_note_file<P: AsRef<Path>>(path: P) -> Result<Note, DomainError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| DomainError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(bytes = bytes.len(), "Read note file");

    parse_note_bytes(&bytes, &path.display().to_string())
}

/// Parse a note from any reader. Read failures are reported as parse errors
/// since there is no path to blame.
pub fn parse_note_reader<R: Read>(mut reader: R) -> Result<Note, DomainError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| parse_error(STREAM_ORIGIN, e.into()))?;
    parse_note_bytes(&bytes, STREAM_ORIGIN)
}

pub fn parse_note_str(xml: &str) -> Result<Note, DomainError> {
    parse_document(xml, INLINE_ORIGIN)
}

fn parse_note_bytes(bytes: &[u8], origin: &str) -> Result<Note, DomainError> {
    let text = decode_document(bytes).map_err(|e| parse_error(origin, e))?;
    parse_document(&text, origin)
}

fn parse_document(text: &str, origin: &str) -> Result<Note, DomainError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let document =
        Document::parse_with_options(text, options).map_err(|e| parse_error(origin, e.into()))?;

    let root = document.root_element();
    trace!(root = root.tag_name().name(), "Parsed XML document");

    let mut note = Note::new();
    for child in root.children().filter(|n| n.is_element()) {
        let name = field_name(&child);
        let text = child.text().filter(|t| !t.is_empty()).map(str::to_string);
        if note.insert(name.clone(), text).is_some() {
            debug!(field = %name, "Repeated field, keeping last occurrence");
        }
    }

    debug!(fields = note.len(), "Flattened note");
    Ok(note)
}

/// Clark notation (`{uri}local`) for namespaced tags, bare local name otherwise.
fn field_name(node: &Node) -> String {
    let tag = node.tag_name();
    match tag.namespace() {
        Some(ns) => format!("{{{}}}{}", ns, tag.name()),
        None => tag.name().to_string(),
    }
}

fn parse_error(origin: &str, source: XmlError) -> DomainError {
    DomainError::Parse {
        origin: origin.to_string(),
        source,
    }
}
