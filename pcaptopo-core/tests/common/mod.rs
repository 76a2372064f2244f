//! Capture construction helpers shared by the integration tests.

#![allow(dead_code)]

/// Builds a classic capture file record by record.
pub struct CaptureFile {
    big_endian: bool,
    data: Vec<u8>,
}

impl CaptureFile {
    /// Little-endian, microsecond timestamps, Ethernet.
    pub fn new() -> Self {
        Self::with_header([0xd4, 0xc3, 0xb2, 0xa1], false, 1)
    }

    pub fn big_endian() -> Self {
        Self::with_header([0xa1, 0xb2, 0xc3, 0xd4], true, 1)
    }

    pub fn with_link_type(link_type: u32) -> Self {
        Self::with_header([0xd4, 0xc3, 0xb2, 0xa1], false, link_type)
    }

    fn with_header(magic: [u8; 4], big_endian: bool, link_type: u32) -> Self {
        let mut file = CaptureFile {
            big_endian,
            data: Vec::new(),
        };
        file.data.extend_from_slice(&magic);
        file.data.extend_from_slice(&[0x00; 12]); // Version, thiszone, sigfigs
        file.push_u32(65535); // Snaplen
        file.push_u32(link_type);
        file
    }

    fn push_u32(&mut self, value: u32) {
        let bytes = if self.big_endian {
            value.to_be_bytes()
        } else {
            value.to_le_bytes()
        };
        self.data.extend_from_slice(&bytes);
    }

    pub fn record(mut self, ts_sec: u32, frame: &[u8]) -> Self {
        self.push_u32(ts_sec);
        self.push_u32(0);
        self.push_u32(frame.len() as u32);
        self.push_u32(frame.len() as u32);
        self.data.extend_from_slice(frame);
        self
    }

    pub fn bytes(self) -> Vec<u8> {
        self.data
    }
}

/// Ethernet + IPv4 (IHL 5) + UDP frame.
pub fn udp_frame(
    src_mac: [u8; 6],
    src_ip: [u8; 4],
    dst_ip: [u8; 4],
    src_port: u16,
    dst_port: u16,
    payload: &[u8],
) -> Vec<u8> {
    let mut frame = Vec::new();
    frame.extend_from_slice(&[0xff; 6]);
    frame.extend_from_slice(&src_mac);
    frame.extend_from_slice(&[0x08, 0x00]);

    let total_len = (20 + 8 + payload.len()) as u16;
    frame.extend_from_slice(&[0x45, 0x00]);
    frame.extend_from_slice(&total_len.to_be_bytes());
    frame.extend_from_slice(&[0x00, 0x00, 0x40, 0x00, 0x40, 17, 0x00, 0x00]);
    frame.extend_from_slice(&src_ip);
    frame.extend_from_slice(&dst_ip);

    frame.extend_from_slice(&src_port.to_be_bytes());
    frame.extend_from_slice(&dst_port.to_be_bytes());
    frame.extend_from_slice(&((8 + payload.len()) as u16).to_be_bytes());
    frame.extend_from_slice(&[0x00, 0x00]);
    frame.extend_from_slice(payload);
    frame
}

/// Plain IPv4 traffic between two hosts.
pub fn ipv4_frame(src_mac: [u8; 6], src_ip: [u8; 4], dst_ip: [u8; 4]) -> Vec<u8> {
    udp_frame(src_mac, src_ip, dst_ip, 40000, 443, &[0u8; 16])
}

/// A BOOTP request whose options area (offset 236) holds `options` verbatim.
pub fn bootp(options: &[u8]) -> Vec<u8> {
    let mut msg = vec![0u8; 236];
    msg[0] = 1; // BOOTREQUEST
    msg[1] = 1;
    msg[2] = 6;
    msg.extend_from_slice(options);
    msg
}

/// Option 12 followed by the end option.
pub fn hostname_option(value: &[u8]) -> Vec<u8> {
    let mut opts = vec![12, value.len() as u8];
    opts.extend_from_slice(value);
    opts.push(255);
    opts
}

/// DHCP client broadcast from `src_ip` carrying `options`.
pub fn dhcp_frame(src_mac: [u8; 6], src_ip: [u8; 4], options: &[u8]) -> Vec<u8> {
    udp_frame(src_mac, src_ip, [255, 255, 255, 255], 68, 67, &bootp(options))
}

pub const MAC_A: [u8; 6] = [0x3c, 0x22, 0xfb, 0x00, 0x00, 0x0a];
pub const MAC_B: [u8; 6] = [0x3c, 0x22, 0xfb, 0x00, 0x00, 0x0b];
pub const MAC_C: [u8; 6] = [0x3c, 0x22, 0xfb, 0x00, 0x00, 0x0c];
