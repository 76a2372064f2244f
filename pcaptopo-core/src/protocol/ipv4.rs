//! IPv4 header field extraction.
//!
//! Only the addresses, the protocol number and the header length are read.
//! Options are skipped, never parsed, and no checksum or version validation
//! is performed.

use std::net::Ipv4Addr;

/// Minimum IPv4 header size (IHL = 5).
pub const IPV4_MIN_HEADER_SIZE: usize = 20;

/// IP protocol number for UDP.
pub const PROTO_UDP: u8 = 17;

/// A borrowed IPv4 packet.
#[derive(Debug, Clone, Copy)]
pub struct Ipv4Packet<'a> {
    pub src_ip: Ipv4Addr,
    pub dst_ip: Ipv4Addr,
    pub protocol: u8,
    /// Low nibble of the first header byte times four
    pub header_len: usize,
    /// Bytes after the variable-length header (empty if the header overruns)
    pub payload: &'a [u8],
}

/// Read the fixed part of an IPv4 header from the front of `data`.
///
/// Returns `None` if fewer than [`IPV4_MIN_HEADER_SIZE`] bytes are available.
pub fn parse(data: &[u8]) -> Option<Ipv4Packet<'_>> {
    if data.len() < IPV4_MIN_HEADER_SIZE {
        return None;
    }

    let header_len = usize::from(data[0] & 0x0f) * 4;

    Some(Ipv4Packet {
        src_ip: Ipv4Addr::new(data[12], data[13], data[14], data[15]),
        dst_ip: Ipv4Addr::new(data[16], data[17], data[18], data[19]),
        protocol: data[9],
        header_len,
        payload: data.get(header_len..).unwrap_or(&[]),
    })
}
