// src/domain/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Note file not found or unreadable: {}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed XML in {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: XmlError,
    },
    #[error("Note is missing the '{0}' field")]
    MissingField(String),
}

/// Low-level reason a document could not be turned into a note.
#[derive(Error, Debug)]
pub enum XmlError {
    #[error(transparent)]
    Syntax(#[from] roxmltree::Error),
    #[error("content is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
    #[error("content is not valid {0}")]
    Decode(&'static str),
    #[error("unsupported encoding '{0}'")]
    UnsupportedEncoding(String),
    #[error("failed to read content: {0}")]
    Read(#[from] std::io::Error),
}
