//! Per-frame field extraction.
//!
//! [`decode_frame`] walks Ethernet II -> IPv4 -> UDP -> BOOTP for one captured
//! frame and returns the fields the topology builder needs. Anything that is
//! not IPv4 over Ethernet yields `None`; that is never an error.
//!
//! [`decode_endpoints`] is the cheaper subset used by streaming mode: it stops
//! after the IPv4 addresses.

use std::net::Ipv4Addr;

use serde::Serialize;

use crate::format::MacAddr;

pub mod dhcp;
pub mod ethernet;
pub mod ipv4;
pub mod udp;

// Test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;

use ethernet::{ethertype, EthernetFrame, ETHERNET_HEADER_SIZE};
use ipv4::{Ipv4Packet, IPV4_MIN_HEADER_SIZE, PROTO_UDP};

/// Minimum captured length for an IPv4-over-Ethernet frame to be decoded.
pub const MIN_IPV4_FRAME_SIZE: usize = ETHERNET_HEADER_SIZE + IPV4_MIN_HEADER_SIZE;

/// Source/destination pair of one IPv4 packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Endpoints {
    pub src_ip: Ipv4Addr,
    pub dst_ip: Ipv4Addr,
}

/// Fields extracted from one IPv4 frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFrame {
    pub src_mac: MacAddr,
    pub src_ip: Ipv4Addr,
    pub dst_ip: Ipv4Addr,
    /// IP protocol number (6 = TCP, 17 = UDP, ...)
    pub protocol: u8,
    /// DHCP option 12, when the frame is a client-to-server BOOTP message carrying one
    pub hostname: Option<String>,
}

impl DecodedFrame {
    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            src_ip: self.src_ip,
            dst_ip: self.dst_ip,
        }
    }
}

fn decode_ipv4(frame: &[u8]) -> Option<(EthernetFrame<'_>, Ipv4Packet<'_>)> {
    let eth = ethernet::parse(frame)?;
    if eth.ethertype != ethertype::IPV4 || frame.len() < MIN_IPV4_FRAME_SIZE {
        return None;
    }
    let ip = ipv4::parse(eth.payload)?;
    Some((eth, ip))
}

/// Decode one captured frame (the bytes following its record header).
pub fn decode_frame(frame: &[u8]) -> Option<DecodedFrame> {
    let (eth, ip) = decode_ipv4(frame)?;

    let hostname = if ip.protocol == PROTO_UDP {
        udp::parse(ip.payload)
            .filter(|udp| udp.dst_port == dhcp::DHCP_SERVER_PORT)
            .and_then(|udp| dhcp::extract_hostname(udp.payload))
    } else {
        None
    };

    Some(DecodedFrame {
        src_mac: eth.src_mac,
        src_ip: ip.src_ip,
        dst_ip: ip.dst_ip,
        protocol: ip.protocol,
        hostname,
    })
}

/// Classify one captured frame as an IPv4 source/destination pair.
pub fn decode_endpoints(frame: &[u8]) -> Option<Endpoints> {
    let (_, ip) = decode_ipv4(frame)?;
    Some(Endpoints {
        src_ip: ip.src_ip,
        dst_ip: ip.dst_ip,
    })
}
