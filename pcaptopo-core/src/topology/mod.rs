//! Batch topology extraction.
//!
//! [`parse_capture`] walks a whole in-memory capture and aggregates every
//! IPv4 record into hosts and connections. A record that would run past the
//! end of the buffer ends the walk without an error; everything gathered up
//! to that point is returned.

mod builder;
mod model;

use tracing::debug;

use crate::error::Result;
use crate::pcap::{parse_capture_header, RecordHeader, GLOBAL_HEADER_SIZE, RECORD_HEADER_SIZE};
use crate::protocol::decode_frame;

pub use builder::TopologyBuilder;
pub use model::{CaptureStats, Connection, ConnectionKey, Host, Topology};

/// Parse a complete capture held in memory.
///
/// Fails only if the global header is unusable.
pub fn parse_capture(data: &[u8]) -> Result<Topology> {
    let header = parse_capture_header(data)?;
    let mut builder = TopologyBuilder::new();
    let mut offset = GLOBAL_HEADER_SIZE;

    while let Some(record) = RecordHeader::parse(&data[offset..], &header) {
        let end = match offset.checked_add(record.record_len()) {
            Some(end) if end <= data.len() => end,
            _ => {
                debug!(
                    offset,
                    captured_len = record.captured_len,
                    available = data.len() - offset,
                    "Capture truncated inside record"
                );
                builder.mark_truncated();
                break;
            }
        };

        builder.record_seen();
        if let Some(frame) = decode_frame(&data[offset + RECORD_HEADER_SIZE..end]) {
            builder.observe(&frame, record.timestamp_ms);
        }
        offset = end;
    }

    if offset < data.len() && data.len() - offset < RECORD_HEADER_SIZE {
        debug!(offset, "Capture truncated inside record header");
        builder.mark_truncated();
    }

    let topology = builder.finish();
    debug!(
        records = topology.stats.records,
        hosts = topology.hosts.len(),
        connections = topology.connections.len(),
        "Parsed capture"
    );
    Ok(topology)
}
