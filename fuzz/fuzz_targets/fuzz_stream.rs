//! Fuzz target for the streaming walker.
//!
//! The first byte picks a chunk size; the rest is the capture. Streamed pairs
//! must match what the batch parser counts for the same bytes.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pcaptopo_core::stream::{parse_capture_stream, IterChunks};
use pcaptopo_core::parse_capture;

fuzz_target!(|data: &[u8]| {
    let Some((&size, capture)) = data.split_first() else {
        return;
    };
    let chunk_size = usize::from(size).max(1);

    let mut packets = 0u64;
    let mut failed = false;
    for packet in parse_capture_stream(IterChunks::new(capture.chunks(chunk_size))) {
        match packet {
            Ok(_) => packets += 1,
            Err(_) => failed = true,
        }
    }

    if let Ok(topology) = parse_capture(capture) {
        assert!(!failed);
        assert_eq!(packets, topology.stats.ipv4_packets);
    }
});
