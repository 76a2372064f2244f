//! Command-line argument definitions.

use clap::builder::TypedValueParser;
use clap::Parser;
use std::path::PathBuf;

use pcaptopo_core::stream::DEFAULT_CHUNK_SIZE;

use super::OutputFormat;

/// Extract hosts, connections and DHCP hostnames from a PCAP capture.
#[derive(Parser, Debug)]
#[command(name = "pcaptopo")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Capture file (classic PCAP, Ethernet link type)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Walk the capture incrementally, printing each IPv4 packet as it is read
    #[arg(long = "stream")]
    pub stream: bool,

    /// Read size in bytes when streaming
    #[arg(
        long = "chunk-size",
        value_name = "BYTES",
        default_value_t = DEFAULT_CHUNK_SIZE,
        value_parser = clap::value_parser!(u64).range(1..).map(|v| v as usize)
    )]
    pub chunk_size: usize,

    /// Output format for stdout
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
