//! Test utilities for frame decoding.
//!
//! Provides builders for constructing Ethernet/IPv4/UDP/BOOTP frames and
//! whole capture files.

use crate::pcap::{ByteOrder, TimestampUnit};

/// Builder for constructing Ethernet frames.
#[derive(Debug, Clone)]
pub struct EthernetBuilder {
    src_mac: [u8; 6],
    dst_mac: [u8; 6],
    ethertype: u16,
    payload: Vec<u8>,
}

impl Default for EthernetBuilder {
    fn default() -> Self {
        Self {
            src_mac: [0x00, 0x11, 0x22, 0x33, 0x44, 0x55],
            dst_mac: [0xff, 0xff, 0xff, 0xff, 0xff, 0xff],
            ethertype: 0x0800, // IPv4
            payload: Vec::new(),
        }
    }
}

impl EthernetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn src_mac(mut self, mac: [u8; 6]) -> Self {
        self.src_mac = mac;
        self
    }

    pub fn dst_mac(mut self, mac: [u8; 6]) -> Self {
        self.dst_mac = mac;
        self
    }

    pub fn ethertype(mut self, ethertype: u16) -> Self {
        self.ethertype = ethertype;
        self
    }

    pub fn ipv4(self) -> Self {
        self.ethertype(0x0800)
    }

    pub fn ipv6(self) -> Self {
        self.ethertype(0x86DD)
    }

    pub fn arp(self) -> Self {
        self.ethertype(0x0806)
    }

    pub fn payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = payload;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut frame = Vec::with_capacity(14 + self.payload.len());
        frame.extend_from_slice(&self.dst_mac);
        frame.extend_from_slice(&self.src_mac);
        frame.extend_from_slice(&self.ethertype.to_be_bytes());
        frame.extend_from_slice(&self.payload);
        frame
    }
}

/// Builder for constructing IPv4 headers.
#[derive(Debug, Clone)]
pub struct Ipv4Builder {
    protocol: u8,
    src_ip: [u8; 4],
    dst_ip: [u8; 4],
    options: Vec<u8>,
    payload: Vec<u8>,
}

impl Default for Ipv4Builder {
    fn default() -> Self {
        Self {
            protocol: 6, // TCP
            src_ip: [192, 168, 1, 1],
            dst_ip: [192, 168, 1, 2],
            options: Vec::new(),
            payload: Vec::new(),
        }
    }
}

impl Ipv4Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn protocol(mut self, protocol: u8) -> Self {
        self.protocol = protocol;
        self
    }

    pub fn tcp(self) -> Self {
        self.protocol(6)
    }

    pub fn udp(self) -> Self {
        self.protocol(17)
    }

    pub fn src_ip(mut self, ip: [u8; 4]) -> Self {
        self.src_ip = ip;
        self
    }

    pub fn dst_ip(mut self, ip: [u8; 4]) -> Self {
        self.dst_ip = ip;
        self
    }

    /// Header options; must be a multiple of 4 bytes.
    pub fn options(mut self, options: Vec<u8>) -> Self {
        self.options = options;
        self
    }

    pub fn payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = payload;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let header_len = 20 + self.options.len();
        let total_length = (header_len + self.payload.len()) as u16;
        let mut header = Vec::with_capacity(header_len + self.payload.len());

        header.push(0x40 | (header_len / 4) as u8);
        header.push(0x00); // DSCP/ECN
        header.extend_from_slice(&total_length.to_be_bytes());
        header.extend_from_slice(&[0x00, 0x01]); // Identification
        header.extend_from_slice(&[0x00, 0x00]); // Flags/fragment
        header.push(64); // TTL
        header.push(self.protocol);
        header.extend_from_slice(&[0x00, 0x00]); // Checksum (not calculated)
        header.extend_from_slice(&self.src_ip);
        header.extend_from_slice(&self.dst_ip);
        header.extend_from_slice(&self.options);
        header.extend_from_slice(&self.payload);

        header
    }
}

/// Builder for constructing UDP headers.
#[derive(Debug, Clone)]
pub struct UdpBuilder {
    src_port: u16,
    dst_port: u16,
    payload: Vec<u8>,
}

impl Default for UdpBuilder {
    fn default() -> Self {
        Self {
            src_port: 12345,
            dst_port: 53,
            payload: Vec::new(),
        }
    }
}

impl UdpBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn src_port(mut self, port: u16) -> Self {
        self.src_port = port;
        self
    }

    pub fn dst_port(mut self, port: u16) -> Self {
        self.dst_port = port;
        self
    }

    pub fn payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = payload;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let length = 8 + self.payload.len() as u16;
        let mut header = Vec::with_capacity(8 + self.payload.len());

        header.extend_from_slice(&self.src_port.to_be_bytes());
        header.extend_from_slice(&self.dst_port.to_be_bytes());
        header.extend_from_slice(&length.to_be_bytes());
        header.extend_from_slice(&[0x00, 0x00]); // Checksum
        header.extend_from_slice(&self.payload);

        header
    }
}

/// Builder for BOOTP/DHCP client messages.
///
/// Options are written verbatim in the order given; no end option is
/// appended unless [`BootpBuilder::end`] is called.
#[derive(Debug, Clone)]
pub struct BootpBuilder {
    chaddr: [u8; 6],
    cookie: bool,
    options: Vec<u8>,
}

impl Default for BootpBuilder {
    fn default() -> Self {
        Self {
            chaddr: [0x00, 0x11, 0x22, 0x33, 0x44, 0x55],
            cookie: false,
            options: Vec::new(),
        }
    }
}

impl BootpBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the RFC 2131 magic cookie at offset 236, ahead of the options.
    pub fn with_cookie(mut self) -> Self {
        self.cookie = true;
        self
    }

    /// Append one option. End (255) is written as a bare code byte.
    pub fn option(mut self, code: u8, value: &[u8]) -> Self {
        self.options.push(code);
        if code != 255 {
            self.options.push(value.len() as u8);
            self.options.extend_from_slice(value);
        }
        self
    }

    pub fn hostname(self, name: &str) -> Self {
        self.option(12, name.as_bytes())
    }

    pub fn end(self) -> Self {
        self.option(255, &[])
    }

    pub fn build(self) -> Vec<u8> {
        let mut msg = vec![0u8; 236];
        msg[0] = 1; // BOOTREQUEST
        msg[1] = 1; // Ethernet
        msg[2] = 6; // hlen
        msg[4..8].copy_from_slice(&0x3903_f326u32.to_be_bytes()); // xid
        msg[28..34].copy_from_slice(&self.chaddr);
        if self.cookie {
            msg.extend_from_slice(&[0x63, 0x82, 0x53, 0x63]);
        }
        msg.extend_from_slice(&self.options);
        msg
    }
}

/// A DHCP client broadcast: UDP 68 -> 67 to 255.255.255.255 carrying `bootp`.
pub fn dhcp_frame(src_mac: [u8; 6], src_ip: [u8; 4], bootp: Vec<u8>) -> Vec<u8> {
    EthernetBuilder::new()
        .src_mac(src_mac)
        .payload(
            Ipv4Builder::new()
                .udp()
                .src_ip(src_ip)
                .dst_ip([255, 255, 255, 255])
                .payload(
                    UdpBuilder::new()
                        .src_port(68)
                        .dst_port(67)
                        .payload(bootp)
                        .build(),
                )
                .build(),
        )
        .build()
}

/// A minimal TCP-over-IPv4 frame between two addresses.
pub fn ipv4_frame(src_mac: [u8; 6], src_ip: [u8; 4], dst_ip: [u8; 4]) -> Vec<u8> {
    EthernetBuilder::new()
        .src_mac(src_mac)
        .payload(
            Ipv4Builder::new()
                .src_ip(src_ip)
                .dst_ip(dst_ip)
                .payload(vec![0; 20])
                .build(),
        )
        .build()
}

/// Builder for whole capture files.
#[derive(Debug, Clone)]
pub struct CaptureBuilder {
    byte_order: ByteOrder,
    unit: TimestampUnit,
    link_type: u32,
    records: Vec<u8>,
}

impl Default for CaptureBuilder {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::Little,
            unit: TimestampUnit::Microsecond,
            link_type: 1,
            records: Vec::new(),
        }
    }
}

impl CaptureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn big_endian(mut self) -> Self {
        self.byte_order = ByteOrder::Big;
        self
    }

    pub fn nanosecond(mut self) -> Self {
        self.unit = TimestampUnit::Nanosecond;
        self
    }

    pub fn link_type(mut self, link_type: u32) -> Self {
        self.link_type = link_type;
        self
    }

    fn u32_bytes(&self, value: u32) -> [u8; 4] {
        match self.byte_order {
            ByteOrder::Big => value.to_be_bytes(),
            ByteOrder::Little => value.to_le_bytes(),
        }
    }

    /// Append one record with the given timestamp and frame bytes.
    pub fn record(mut self, ts_sec: u32, ts_frac: u32, frame: &[u8]) -> Self {
        let len = frame.len() as u32;
        let header = [
            self.u32_bytes(ts_sec),
            self.u32_bytes(ts_frac),
            self.u32_bytes(len),
            self.u32_bytes(len),
        ];
        for field in header {
            self.records.extend_from_slice(&field);
        }
        self.records.extend_from_slice(frame);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let magic: [u8; 4] = match (self.byte_order, self.unit) {
            (ByteOrder::Big, TimestampUnit::Microsecond) => [0xa1, 0xb2, 0xc3, 0xd4],
            (ByteOrder::Little, TimestampUnit::Microsecond) => [0xd4, 0xc3, 0xb2, 0xa1],
            (ByteOrder::Big, TimestampUnit::Nanosecond) => [0xa1, 0xb2, 0xc3, 0xd5],
            (ByteOrder::Little, TimestampUnit::Nanosecond) => [0xd5, 0xc3, 0xb2, 0xa1],
        };

        let mut data = Vec::with_capacity(24 + self.records.len());
        data.extend_from_slice(&magic);
        data.extend_from_slice(&[0x00; 4]); // Version (ignored)
        data.extend_from_slice(&[0x00; 8]); // Thiszone + sigfigs
        data.extend_from_slice(&self.u32_bytes(65535)); // Snaplen
        data.extend_from_slice(&self.u32_bytes(self.link_type));
        data.extend_from_slice(&self.records);
        data
    }
}
