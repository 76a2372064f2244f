//! Command-line interface module.
//!
//! This module handles:
//! - Argument parsing via clap
//! - Loading or streaming a capture from disk
//! - Output formatting (table, CSV, JSON)

mod args;
mod capture;
mod output;

pub use args::Args;
pub use capture::{load_topology, stream_topology};
pub use output::{OutputFormat, OutputFormatter};
