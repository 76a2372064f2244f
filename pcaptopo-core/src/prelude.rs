//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```rust,no_run
//! use pcaptopo_core::prelude::*;
//!
//! let data = std::fs::read("capture.pcap").unwrap();
//! let topology = parse_capture(&data).unwrap();
//! println!("{} hosts", topology.hosts.len());
//! ```

// Batch mode
pub use crate::topology::{parse_capture, Connection, Host, Topology, TopologyBuilder};

// Streaming mode
pub use crate::stream::{
    parse_capture_reader, parse_capture_stream, CaptureStream, ChunkSource, IterChunks,
    ReadChunks, StreamPacket,
};

// Error types
pub use crate::error::{Error, FormatError, Result};
