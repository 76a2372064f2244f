//! Incremental host/connection aggregation.

use std::collections::HashMap;
use std::net::Ipv4Addr;

use crate::format::MacAddr;
use crate::protocol::{DecodedFrame, Endpoints};

use super::model::{CaptureStats, Connection, ConnectionKey, Host, Topology};

/// Accumulates hosts, connections and DHCP hostnames, then resolves them
/// into a [`Topology`].
///
/// Hostnames are kept in two maps until [`TopologyBuilder::finish`]: one keyed
/// by IP (current lease) and one keyed by MAC (survives address churn). Each
/// host takes the IP-keyed name if present, else the name recorded for its MAC.
#[derive(Debug, Default)]
pub struct TopologyBuilder {
    hosts: Vec<Host>,
    host_index: HashMap<Ipv4Addr, usize>,
    connections: Vec<Connection>,
    connection_index: HashMap<ConnectionKey, usize>,
    ip_to_hostname: HashMap<Ipv4Addr, String>,
    mac_to_hostname: HashMap<MacAddr, String>,
    stats: CaptureStats,
}

impl TopologyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn host_mut(&mut self, ip: Ipv4Addr) -> &mut Host {
        let idx = *self.host_index.entry(ip).or_insert_with(|| {
            self.hosts.push(Host::new(ip));
            self.hosts.len() - 1
        });
        &mut self.hosts[idx]
    }

    fn count_connection(&mut self, a: Ipv4Addr, b: Ipv4Addr) {
        let key = ConnectionKey::new(a, b);
        let idx = *self.connection_index.entry(key).or_insert_with(|| {
            self.connections.push(Connection::new(key));
            self.connections.len() - 1
        });
        self.connections[idx].packet_count += 1;
    }

    /// Count one complete record, whether or not it decoded.
    pub fn record_seen(&mut self) {
        self.stats.records += 1;
    }

    /// Note that the walk stopped on an incomplete record.
    pub fn mark_truncated(&mut self) {
        self.stats.truncated = true;
    }

    /// Fold in one decoded IPv4 frame.
    pub fn observe(&mut self, frame: &DecodedFrame, timestamp_ms: u64) {
        self.stats.ipv4_packets += 1;

        let src = self.host_mut(frame.src_ip);
        src.touch(Some(timestamp_ms));
        src.mac = Some(frame.src_mac);

        self.host_mut(frame.dst_ip).touch(Some(timestamp_ms));
        self.count_connection(frame.src_ip, frame.dst_ip);

        if let Some(hostname) = &frame.hostname {
            self.stats.hostnames += 1;
            // A client without a lease yet (0.0.0.0) is only identifiable by MAC
            if !frame.src_ip.is_unspecified() {
                self.ip_to_hostname.insert(frame.src_ip, hostname.clone());
            }
            self.mac_to_hostname.insert(frame.src_mac, hostname.clone());
        }
    }

    /// Fold in a bare endpoint pair (no MAC, timestamp or hostname).
    pub fn observe_endpoints(&mut self, endpoints: Endpoints) {
        self.stats.ipv4_packets += 1;
        self.host_mut(endpoints.src_ip).touch(None);
        self.host_mut(endpoints.dst_ip).touch(None);
        self.count_connection(endpoints.src_ip, endpoints.dst_ip);
    }

    /// Resolve hostnames and produce the final topology.
    pub fn finish(self) -> Topology {
        let TopologyBuilder {
            mut hosts,
            connections,
            ip_to_hostname,
            mac_to_hostname,
            stats,
            ..
        } = self;

        for host in &mut hosts {
            host.hostname = ip_to_hostname.get(&host.ip).cloned().or_else(|| {
                host.mac
                    .as_ref()
                    .and_then(|mac| mac_to_hostname.get(mac))
                    .cloned()
            });
        }

        Topology {
            hosts,
            connections,
            stats,
        }
    }
}
