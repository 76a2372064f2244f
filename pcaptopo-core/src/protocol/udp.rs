//! UDP header extraction.

use etherparse::UdpHeaderSlice;

/// UDP header size.
pub const UDP_HEADER_SIZE: usize = 8;

/// A borrowed UDP datagram.
#[derive(Debug, Clone, Copy)]
pub struct UdpDatagram<'a> {
    pub src_port: u16,
    pub dst_port: u16,
    /// Everything after the 8-byte header, up to the end of the captured frame
    pub payload: &'a [u8],
}

/// Split a UDP header off the front of `data`.
///
/// The header's length field is not consulted; the payload runs to the end
/// of the captured bytes.
pub fn parse(data: &[u8]) -> Option<UdpDatagram<'_>> {
    let udp = UdpHeaderSlice::from_slice(data).ok()?;

    Some(UdpDatagram {
        src_port: udp.source_port(),
        dst_port: udp.destination_port(),
        payload: &data[UDP_HEADER_SIZE..],
    })
}
