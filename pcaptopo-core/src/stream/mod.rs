//! Streaming capture walker.
//!
//! This module provides:
//! - [`ChunkSource`] - pull-based byte chunk input ([`ReadChunks`], [`IterChunks`])
//! - [`ByteAccumulator`] - the `ensure`/`consume` buffer between chunks and records
//! - [`CaptureStream`] - iterator of source/destination pairs, one per IPv4 record
//!
//! The walker is single-consumer and holds no background work; dropping it
//! (or simply not pulling) stops it.

mod accumulator;
mod source;
mod walker;

pub use accumulator::ByteAccumulator;
pub use source::{ChunkSource, IterChunks, ReadChunks, DEFAULT_CHUNK_SIZE};
pub use walker::{parse_capture_reader, parse_capture_stream, CaptureStream, StreamPacket, StreamState};
