// src/cli/mod.rs
pub mod args;
pub mod usage;

pub use args::{Args, Invocation};
pub use usage::{USAGE, USAGE_HINT};
