//! Capture file framing.
//!
//! The main items are:
//! - [`parse_capture_header`] - validate the 24-byte global header
//! - [`RecordHeader`] - decode each 16-byte record header

mod header;

pub use header::{
    magic, parse_capture_header, ByteOrder, CaptureHeader, RecordHeader, TimestampUnit,
    GLOBAL_HEADER_SIZE, LINKTYPE_ETHERNET, RECORD_HEADER_SIZE,
};
