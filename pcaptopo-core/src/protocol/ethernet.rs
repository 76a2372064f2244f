//! Ethernet II framing.

use etherparse::Ethernet2HeaderSlice;

use crate::format::MacAddr;

/// Ethernet II header size (no 802.1Q tag).
pub const ETHERNET_HEADER_SIZE: usize = 14;

/// EtherType values the decoder cares about.
pub mod ethertype {
    pub const IPV4: u16 = 0x0800;
    pub const ARP: u16 = 0x0806;
    pub const VLAN: u16 = 0x8100;
    pub const IPV6: u16 = 0x86DD;
}

/// A borrowed Ethernet II frame.
#[derive(Debug, Clone, Copy)]
pub struct EthernetFrame<'a> {
    pub src_mac: MacAddr,
    pub dst_mac: MacAddr,
    pub ethertype: u16,
    pub payload: &'a [u8],
}

/// Split an Ethernet II header off the front of `data`.
///
/// Returns `None` if fewer than 14 bytes are available.
pub fn parse(data: &[u8]) -> Option<EthernetFrame<'_>> {
    let eth = Ethernet2HeaderSlice::from_slice(data).ok()?;

    Some(EthernetFrame {
        src_mac: MacAddr(eth.source()),
        dst_mac: MacAddr(eth.destination()),
        ethertype: eth.ether_type().0,
        payload: &data[ETHERNET_HEADER_SIZE..],
    })
}
