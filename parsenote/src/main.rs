// src/main.rs
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use parsenote::cli::Args;
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging based on verbosity; stdout is reserved for the note
    let filter = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(format!("parsenote={}", filter).parse()?),
        )
        .init();

    Ok(parsenote::run(args)?.exit_code())
}
