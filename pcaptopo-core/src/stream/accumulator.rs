//! Pending-byte buffer for the streaming walker.

use std::io;

use bytes::{Bytes, BytesMut};

use super::source::ChunkSource;

/// Holds bytes pulled from a [`ChunkSource`] until a complete structure is
/// available, then hands that prefix out.
///
/// At most one header/record pair plus the unconsumed tail of the latest
/// chunk is buffered at any time.
#[derive(Debug, Default)]
pub struct ByteAccumulator {
    buf: BytesMut,
    source_done: bool,
}

impl ByteAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pull chunks until at least `n` bytes are buffered.
    ///
    /// Returns `Ok(false)` if the source ended first.
    pub fn ensure<S: ChunkSource + ?Sized>(&mut self, n: usize, source: &mut S) -> io::Result<bool> {
        while self.buf.len() < n {
            if self.source_done {
                return Ok(false);
            }
            match source.next_chunk()? {
                Some(chunk) => self.buf.extend_from_slice(&chunk),
                None => self.source_done = true,
            }
        }
        Ok(true)
    }

    /// Buffered bytes not yet consumed.
    #[inline]
    pub fn peek(&self) -> &[u8] {
        &self.buf
    }

    /// Remove and return the first `n` bytes.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `n` bytes are buffered; call [`ensure`](Self::ensure) first.
    pub fn consume(&mut self, n: usize) -> Bytes {
        self.buf.split_to(n).freeze()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Whether the source has reported end of stream.
    #[inline]
    pub fn source_done(&self) -> bool {
        self.source_done
    }
}
