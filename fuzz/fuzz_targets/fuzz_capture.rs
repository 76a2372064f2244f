//! Fuzz target for batch capture parsing.
//!
//! Exercises:
//! - Magic and link type validation
//! - Record header walking (huge caplen, truncated tails)
//! - Ethernet/IPv4/UDP/DHCP decoding on arbitrary frame bytes

#![no_main]

use libfuzzer_sys::fuzz_target;
use pcaptopo_core::parse_capture;

fuzz_target!(|data: &[u8]| {
    if let Ok(topology) = parse_capture(data) {
        // Every connection endpoint must also be a host
        for conn in &topology.connections {
            assert!(topology.host(conn.src_ip).is_some());
            assert!(topology.host(conn.dst_ip).is_some());
        }
    }
});
