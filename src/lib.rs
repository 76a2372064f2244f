//! pcaptopo - map the hosts and conversations in a PCAP capture.
//!
//! The parsing itself lives in [`pcaptopo_core`]; this crate adds the
//! command-line front-end that reads a capture from disk and renders the
//! result.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! let topology = pcaptopo::cli::load_topology(Path::new("capture.pcap"))?;
//! println!("{} hosts", topology.hosts.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;

pub use pcaptopo_core::{Error, Result};
