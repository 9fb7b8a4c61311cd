// src/util/testing.rs

use anyhow::Result;
use std::collections::HashMap;
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteSource;
use crate::domain::{DomainError, Note};

/// Shared mock source for testing use cases that depend on NoteSource
///
/// Paths without a configured note behave like missing files.
///
/// # Examples
///
/// ```
/// use parsenote::util::testing::MockNoteSource;
/// use parsenote::domain::Note;
///
/// let note: Note = [("author", Some("Bob".to_string()))].into_iter().collect();
/// let mock = MockNoteSource::builder()
///     .with_note("bob.xml", note)
///     .with_malformed("broken.xml")
///     .build();
/// ```
pub struct MockNoteSource {
    notes: HashMap<PathBuf, Note>,
    malformed: Vec<PathBuf>,
    loaded: Vec<PathBuf>,
}

impl MockNoteSource {
    pub fn builder() -> MockNoteSourceBuilder {
        MockNoteSourceBuilder::new()
    }

    /// Paths requested so far, in call order
    pub fn loaded(&self) -> &[PathBuf] {
        &self.loaded
    }
}

impl NoteSource for MockNoteSource {
    fn load_note(&mut self, path: &Path) -> Result<Note, DomainError> {
        self.loaded.push(path.to_path_buf());

        if self.malformed.iter().any(|p| p == path) {
            return crate::infrastructure::parse_note_str("<note><author>Bob</author");
        }

        self.notes
            .get(path)
            .cloned()
            .ok_or_else(|| DomainError::NotFound {
                path: path.to_path_buf(),
                source: io::Error::from(io::ErrorKind::NotFound),
            })
    }
}

/// Builder for MockNoteSource
pub struct MockNoteSourceBuilder {
    notes: HashMap<PathBuf, Note>,
    malformed: Vec<PathBuf>,
}

impl MockNoteSourceBuilder {
    pub fn new() -> Self {
        Self {
            notes: HashMap::new(),
            malformed: vec![],
        }
    }

    /// Add a note returned for `path`
    pub fn with_note<P: Into<PathBuf>>(mut self, path: P, note: Note) -> Self {
        self.notes.insert(path.into(), note);
        self
    }

    /// Make `path` fail with a parse error
    pub fn with_malformed<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.malformed.push(path.into());
        self
    }

    pub fn build(self) -> MockNoteSource {
        MockNoteSource {
            notes: self.notes,
            malformed: self.malformed,
            loaded: vec![],
        }
    }
}

impl Default for MockNoteSourceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Keep assert_cmd / predicates internals out of the test output
    let noisy_modules = ["assert_cmd", "predicates"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
