//! Drives the core parser against a capture on disk.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use pcaptopo_core::stream::{parse_capture_stream, ReadChunks};
use pcaptopo_core::{parse_capture, Topology, TopologyBuilder};

use super::OutputFormatter;

/// Read the whole capture into memory and aggregate it.
pub fn load_topology(path: &Path) -> Result<Topology> {
    let data =
        fs::read(path).with_context(|| format!("Failed to read capture: {}", path.display()))?;
    info!(path = %path.display(), bytes = data.len(), "Loaded capture");

    let topology = parse_capture(&data)
        .with_context(|| format!("Failed to parse capture: {}", path.display()))?;
    if topology.stats.truncated {
        info!(records = topology.stats.records, "Capture ends with a truncated record");
    }
    Ok(topology)
}

/// Stream the capture in `chunk_size` reads, writing each IPv4 packet as it
/// is decoded. Returns connection and host counts built from the stream.
pub fn stream_topology<W: Write>(
    path: &Path,
    chunk_size: usize,
    formatter: &OutputFormatter,
    writer: &mut W,
) -> Result<Topology> {
    let file =
        File::open(path).with_context(|| format!("Failed to open capture: {}", path.display()))?;
    let mut stream = parse_capture_stream(ReadChunks::with_chunk_size(file, chunk_size));
    let mut builder = TopologyBuilder::new();

    for packet in stream.by_ref() {
        let packet =
            packet.with_context(|| format!("Failed to stream capture: {}", path.display()))?;
        formatter.write_packet(&packet, writer)?;
        builder.observe_endpoints(packet);
    }

    info!(records = stream.records(), "Stream finished");
    Ok(builder.finish())
}
