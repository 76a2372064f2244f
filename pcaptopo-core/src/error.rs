//! Error types for pcaptopo-core.
//!
//! Only two things can go wrong while decoding a capture:
//!
//! - [`FormatError`] - the 24-byte global header is unusable (too short, unknown
//!   magic, or a link type other than Ethernet)
//! - [`enum@Error::Io`] - the chunk source feeding a [`CaptureStream`](crate::stream::CaptureStream)
//!   failed to read
//!
//! Truncated records and uninteresting frames are not errors; the walkers stop
//! or skip silently.

use thiserror::Error;

/// Main error type for pcaptopo-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The capture's global header is invalid
    #[error("capture format error: {0}")]
    Format(#[from] FormatError),

    /// I/O error from the underlying chunk source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Structural problems detectable from the first 24 bytes of a capture.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Fewer than 24 bytes available
    #[error("file too small to be a valid capture ({len} bytes)")]
    TooSmall { len: usize },

    /// First four bytes match none of the recognized magic numbers
    #[error("invalid magic number: 0x{magic:08x}")]
    InvalidMagic { magic: u32 },

    /// Link type other than Ethernet (1)
    #[error("unsupported link type: {link_type}")]
    UnsupportedLinkType { link_type: u32 },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
