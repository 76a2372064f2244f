//! Aggregated topology types.

use std::cmp::Ordering;
use std::net::Ipv4Addr;

use serde::Serialize;

use crate::format::MacAddr;

/// One IPv4 address seen as a source or destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Host {
    pub ip: Ipv4Addr,
    /// Packets in which this address appeared (as either endpoint)
    pub packet_count: u64,
    /// Set only from frames this host transmitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac: Option<MacAddr>,
    /// From DHCP option 12, by IP first and then by MAC
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_seen_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen_ms: Option<u64>,
}

impl Host {
    pub(crate) fn new(ip: Ipv4Addr) -> Self {
        Host {
            ip,
            packet_count: 0,
            mac: None,
            hostname: None,
            first_seen_ms: None,
            last_seen_ms: None,
        }
    }

    pub(crate) fn touch(&mut self, timestamp_ms: Option<u64>) {
        self.packet_count += 1;
        if let Some(ts) = timestamp_ms {
            self.first_seen_ms = Some(self.first_seen_ms.map_or(ts, |first| first.min(ts)));
            self.last_seen_ms = Some(self.last_seen_ms.map_or(ts, |last| last.max(ts)));
        }
    }
}

/// Traffic between an unordered pair of addresses.
///
/// Both directions are merged; `src_ip` is whichever address sorts first in
/// dotted-quad text order, `dst_ip` the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Connection {
    pub src_ip: Ipv4Addr,
    pub dst_ip: Ipv4Addr,
    pub packet_count: u64,
}

impl Connection {
    pub(crate) fn new(key: ConnectionKey) -> Self {
        let (src_ip, dst_ip) = key.text_ordered();
        Connection {
            src_ip,
            dst_ip,
            packet_count: 0,
        }
    }

    /// Whether this connection joins `a` and `b` (in either order).
    pub fn joins(&self, a: Ipv4Addr, b: Ipv4Addr) -> bool {
        ConnectionKey::new(self.src_ip, self.dst_ip) == ConnectionKey::new(a, b)
    }
}

/// Direction-independent identity of a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionKey {
    low: Ipv4Addr,
    high: Ipv4Addr,
}

impl ConnectionKey {
    pub fn new(a: Ipv4Addr, b: Ipv4Addr) -> Self {
        if a <= b {
            ConnectionKey { low: a, high: b }
        } else {
            ConnectionKey { low: b, high: a }
        }
    }

    /// The pair ordered by dotted-quad text ("10.0.0.10" before "10.0.0.9").
    pub fn text_ordered(&self) -> (Ipv4Addr, Ipv4Addr) {
        match self.low.to_string().cmp(&self.high.to_string()) {
            Ordering::Greater => (self.high, self.low),
            _ => (self.low, self.high),
        }
    }
}

/// Counters describing one batch walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CaptureStats {
    /// Complete records walked
    pub records: u64,
    /// Records that decoded as IPv4 over Ethernet
    pub ipv4_packets: u64,
    /// DHCP hostnames accepted
    pub hostnames: u64,
    /// The walk ended on an incomplete trailing record
    pub truncated: bool,
}

/// Hosts and connections extracted from a capture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Topology {
    /// In order of first appearance
    pub hosts: Vec<Host>,
    /// In order of first appearance
    pub connections: Vec<Connection>,
    pub stats: CaptureStats,
}

impl Topology {
    pub fn host(&self, ip: Ipv4Addr) -> Option<&Host> {
        self.hosts.iter().find(|h| h.ip == ip)
    }

    pub fn connection(&self, a: Ipv4Addr, b: Ipv4Addr) -> Option<&Connection> {
        self.connections.iter().find(|c| c.joins(a, b))
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}
