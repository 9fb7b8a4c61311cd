// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use application::NoteReader;
use cli::{Args, Invocation, USAGE, USAGE_HINT};
use infrastructure::XmlNoteSource;
use tracing::{debug, info};

pub use domain::{DomainError, Note};
pub use infrastructure::{parse_note_file, parse_note_reader, parse_note_str};
pub use ports::{render_json, TextPresenter};

/// How a run ended. Help and misuse keep their historical exit statuses:
/// help exits non-zero, a wrong argument count exits zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Printed,
    UsageHint,
    Help,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Printed | Outcome::UsageHint => ExitCode::SUCCESS,
            Outcome::Help => ExitCode::FAILURE,
        }
    }
}

pub fn run(args: Args) -> Result<Outcome> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(args, &mut out)
}

pub fn run_with_output<W: Write>(args: Args, out: &mut W) -> Result<Outcome> {
    debug!(?args, "Starting parsenote with arguments");

    let path = match args.invocation() {
        Invocation::Help => {
            write!(out, "{}", USAGE)?;
            return Ok(Outcome::Help);
        }
        Invocation::Misuse => {
            debug!(files = args.files.len(), "Expected exactly one file argument");
            writeln!(out, "{}", USAGE_HINT)?;
            return Ok(Outcome::UsageHint);
        }
        Invocation::Parse(path) => path,
    };

    let mut reader = NoteReader::new(XmlNoteSource::new());

    info!(path = %path.display(), "Reading note");
    let note = reader
        .read_note(&path)
        .with_context(|| format!("Failed to read note {}", path.display()))?;
    debug!(?note, "Parsed note");

    if args.json {
        writeln!(out, "{}", render_json(&note)?)?;
    } else {
        TextPresenter::new().print(&note, out)?;
    }

    Ok(Outcome::Printed)
}
