// src/cli/args.rs
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(disable_help_flag = true)]
pub struct Args {
    /// Print the usage text and exit
    #[arg(short = 'h', long = "help", action = ArgAction::Count)]
    pub help: u8,

    /// Print the parsed note as JSON instead of the formatted line
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Path to an xml note file; exactly one is expected
    ///
    /// Unknown dash-prefixed words count as files, and once a file is seen
    /// every later argument does too.
    #[arg(value_name = "XML_FILE", allow_hyphen_values = true)]
    pub files: Vec<PathBuf>,
}

/// What a parsed command line asks the tool to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// A single `-h`/`--help` and no file
    Help,
    /// No file, several files, repeated help, or help mixed with a file
    Misuse,
    Parse(PathBuf),
}

impl Args {
    pub fn invocation(&self) -> Invocation {
        match (self.help, self.files.as_slice()) {
            (1, []) => Invocation::Help,
            (0, [path]) => Invocation::Parse(path.clone()),
            _ => Invocation::Misuse,
        }
    }
}
