//! pcaptopo CLI entry point.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pcaptopo::cli::{load_topology, stream_topology, Args, OutputFormat, OutputFormatter};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Set up logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| args.log_level().into()),
        )
        .with_writer(io::stderr)
        .init();

    let formatter = OutputFormatter::new(args.format);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.stream {
        let topology = stream_topology(&args.file, args.chunk_size, &formatter, &mut out)?;
        // Keep JSON lines output machine-readable
        if args.format != OutputFormat::Json {
            writeln!(out)?;
            formatter.write_topology(&topology, &mut out)?;
        }
    } else {
        let topology = load_topology(&args.file)?;
        formatter.write_topology(&topology, &mut out)?;
    }

    out.flush()?;
    Ok(())
}
