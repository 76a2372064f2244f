//! Global capture header and per-record header decoding.
//!
//! Layout of the classic capture format handled here:
//!
//! ```text
//! global header (24 bytes)
//!   0  magic            4   byte order + timestamp resolution
//!   4  version          4   ignored
//!   8  thiszone/sigfigs 8   ignored
//!   16 snaplen          4   ignored
//!   20 link type        4   must be 1 (Ethernet)
//!
//! record header (16 bytes), repeated
//!   0  ts_sec           4
//!   4  ts_frac          4   microseconds or nanoseconds
//!   8  captured length  4   bytes of frame data that follow
//!   12 original length  4   ignored
//! ```

use serde::Serialize;

use crate::error::FormatError;

/// Size of the global capture header.
pub const GLOBAL_HEADER_SIZE: usize = 24;

/// Size of each per-record header.
pub const RECORD_HEADER_SIZE: usize = 16;

/// Link type constant for Ethernet.
pub const LINKTYPE_ETHERNET: u32 = 1;

/// Magic numbers as read big-endian from the first four bytes.
pub mod magic {
    pub const BIG_ENDIAN_MICRO: u32 = 0xa1b2_c3d4;
    pub const LITTLE_ENDIAN_MICRO: u32 = 0xd4c3_b2a1;
    pub const BIG_ENDIAN_NANO: u32 = 0xa1b2_c3d5;
    pub const LITTLE_ENDIAN_NANO: u32 = 0xd5c3_b2a1;
}

/// Byte order of every multi-byte integer in the capture's headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    Big,
    Little,
}

impl ByteOrder {
    #[inline]
    pub fn read_u32(self, bytes: [u8; 4]) -> u32 {
        match self {
            ByteOrder::Big => u32::from_be_bytes(bytes),
            ByteOrder::Little => u32::from_le_bytes(bytes),
        }
    }
}

/// Resolution of the fractional timestamp field in each record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampUnit {
    Microsecond,
    Nanosecond,
}

impl TimestampUnit {
    /// Convert a seconds + fraction pair into whole milliseconds.
    #[inline]
    pub fn to_millis(self, seconds: u32, fraction: u32) -> u64 {
        let frac_ms = match self {
            TimestampUnit::Microsecond => fraction / 1_000,
            TimestampUnit::Nanosecond => fraction / 1_000_000,
        };
        u64::from(seconds) * 1_000 + u64::from(frac_ms)
    }
}

/// Decoded global capture header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CaptureHeader {
    pub byte_order: ByteOrder,
    pub timestamp_unit: TimestampUnit,
    pub link_type: u32,
}

impl CaptureHeader {
    #[inline]
    fn read_u32(&self, data: &[u8], offset: usize) -> u32 {
        self.byte_order.read_u32([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ])
    }
}

/// Parse the 24-byte global header at the start of `data`.
///
/// Only the first [`GLOBAL_HEADER_SIZE`] bytes are inspected.
pub fn parse_capture_header(data: &[u8]) -> Result<CaptureHeader, FormatError> {
    if data.len() < GLOBAL_HEADER_SIZE {
        return Err(FormatError::TooSmall { len: data.len() });
    }

    let magic = u32::from_be_bytes([data[0], data[1], data[2], data[3]]);
    let (byte_order, timestamp_unit) = match magic {
        magic::BIG_ENDIAN_MICRO => (ByteOrder::Big, TimestampUnit::Microsecond),
        magic::LITTLE_ENDIAN_MICRO => (ByteOrder::Little, TimestampUnit::Microsecond),
        magic::BIG_ENDIAN_NANO => (ByteOrder::Big, TimestampUnit::Nanosecond),
        magic::LITTLE_ENDIAN_NANO => (ByteOrder::Little, TimestampUnit::Nanosecond),
        _ => return Err(FormatError::InvalidMagic { magic }),
    };

    let link_type = byte_order.read_u32([data[20], data[21], data[22], data[23]]);
    if link_type != LINKTYPE_ETHERNET {
        return Err(FormatError::UnsupportedLinkType { link_type });
    }

    Ok(CaptureHeader {
        byte_order,
        timestamp_unit,
        link_type,
    })
}

/// One 16-byte record header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    /// Bytes of frame data following this header
    pub captured_len: u32,
    /// Record timestamp normalized to milliseconds since the epoch
    pub timestamp_ms: u64,
}

impl RecordHeader {
    /// Decode a record header from the start of `data`.
    ///
    /// Returns `None` if fewer than [`RECORD_HEADER_SIZE`] bytes are available.
    pub fn parse(data: &[u8], header: &CaptureHeader) -> Option<Self> {
        if data.len() < RECORD_HEADER_SIZE {
            return None;
        }

        let ts_sec = header.read_u32(data, 0);
        let ts_frac = header.read_u32(data, 4);
        let captured_len = header.read_u32(data, 8);

        Some(RecordHeader {
            captured_len,
            timestamp_ms: header.timestamp_unit.to_millis(ts_sec, ts_frac),
        })
    }

    /// Header plus frame data.
    #[inline]
    pub fn record_len(&self) -> usize {
        RECORD_HEADER_SIZE + self.captured_len as usize
    }
}
