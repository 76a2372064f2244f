//! # pcaptopo-core
//!
//! Network topology extraction from classic PCAP captures.
//!
//! This crate decodes the capture framing and just enough of each Ethernet
//! frame (IPv4 addresses, source MAC, DHCP hostname) to build a picture of
//! who talked to whom. It has no I/O of its own beyond a pull-based chunk
//! source for streaming.
//!
//! ## Two modes
//!
//! - **Batch**: [`parse_capture`] takes a whole in-memory capture and returns
//!   aggregated [`Host`]s and [`Connection`]s, with DHCP hostnames resolved.
//! - **Streaming**: [`parse_capture_stream`] wraps a [`ChunkSource`] and yields
//!   one [`StreamPacket`] per IPv4 record as soon as it is complete, buffering
//!   no more than one record at a time.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pcaptopo_core::prelude::*;
//!
//! let data = std::fs::read("capture.pcap").unwrap();
//! let topology = parse_capture(&data).unwrap();
//!
//! for host in &topology.hosts {
//!     println!("{} {:?} ({} packets)", host.ip, host.hostname, host.packet_count);
//! }
//!
//! // Or incrementally
//! let file = std::fs::File::open("capture.pcap").unwrap();
//! for packet in parse_capture_reader(file) {
//!     let packet = packet.unwrap();
//!     println!("{} -> {}", packet.src_ip, packet.dst_ip);
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +---------------------------------------------------------------------+
//! |                        pcaptopo-core                                |
//! +---------------------------------------------------------------------+
//! |  pcap/      - global header + record header decoding                |
//! |  protocol/  - Ethernet, IPv4, UDP, DHCP option 12                   |
//! |  topology/  - batch walker, host/connection aggregation             |
//! |  stream/    - chunk sources, byte accumulator, streaming walker     |
//! |  format/    - MAC address type                                      |
//! |  error/     - Error types                                           |
//! +---------------------------------------------------------------------+
//! ```
//!
//! ## Failure model
//!
//! Only a bad global header (too short, unknown magic, non-Ethernet link
//! type) is an error. Truncated records end the walk quietly, and frames that
//! are not IPv4 are skipped.

pub mod error;
pub mod format;
pub mod pcap;
pub mod prelude;
pub mod protocol;
pub mod stream;
pub mod topology;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, FormatError, Result};
pub use format::MacAddr;
pub use pcap::{parse_capture_header, ByteOrder, CaptureHeader, RecordHeader, TimestampUnit};
pub use protocol::{decode_endpoints, decode_frame, DecodedFrame, Endpoints};
pub use stream::{
    parse_capture_reader, parse_capture_stream, ByteAccumulator, CaptureStream, ChunkSource,
    IterChunks, ReadChunks, StreamPacket, StreamState,
};
pub use topology::{
    parse_capture, CaptureStats, Connection, ConnectionKey, Host, Topology, TopologyBuilder,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
