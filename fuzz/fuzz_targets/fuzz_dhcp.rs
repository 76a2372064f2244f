//! Fuzz target for the BOOTP options scan.
//!
//! Any hostname that comes back must be non-empty printable ASCII.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pcaptopo_core::protocol::dhcp::extract_hostname;

fuzz_target!(|data: &[u8]| {
    if let Some(hostname) = extract_hostname(data) {
        assert!(!hostname.is_empty());
        assert!(hostname.bytes().all(|b| (0x20..=0x7e).contains(&b)));
        assert_eq!(hostname.trim(), hostname);
    }
});
