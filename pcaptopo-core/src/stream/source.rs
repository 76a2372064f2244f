//! Chunked byte sources feeding the streaming walker.

use std::io::{self, Read};

use bytes::{Bytes, BytesMut};

/// Default read size for [`ReadChunks`] (64KB).
pub const DEFAULT_CHUNK_SIZE: usize = 65536;

/// A pull-based source of byte chunks.
///
/// `Ok(None)` marks the end of the stream. Chunks may be any size, including
/// empty; the walker keeps pulling until it has what it needs.
pub trait ChunkSource {
    fn next_chunk(&mut self) -> io::Result<Option<Bytes>>;
}

impl<S: ChunkSource + ?Sized> ChunkSource for &mut S {
    fn next_chunk(&mut self) -> io::Result<Option<Bytes>> {
        (**self).next_chunk()
    }
}

impl<S: ChunkSource + ?Sized> ChunkSource for Box<S> {
    fn next_chunk(&mut self) -> io::Result<Option<Bytes>> {
        (**self).next_chunk()
    }
}

/// Reads fixed-size chunks from any [`Read`] implementation.
///
/// Short reads are passed through as short chunks. Reads land in one reused
/// buffer; its storage is reclaimed once earlier chunks have been dropped.
#[derive(Debug)]
pub struct ReadChunks<R> {
    reader: R,
    chunk_size: usize,
    buf: BytesMut,
}

impl<R: Read> ReadChunks<R> {
    pub fn new(reader: R) -> Self {
        Self::with_chunk_size(reader, DEFAULT_CHUNK_SIZE)
    }

    /// A `chunk_size` of zero is treated as one byte.
    pub fn with_chunk_size(reader: R, chunk_size: usize) -> Self {
        let chunk_size = chunk_size.max(1);
        ReadChunks {
            reader,
            chunk_size,
            buf: BytesMut::with_capacity(chunk_size),
        }
    }

    /// Give back the reader, positioned after the last chunk returned.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> ChunkSource for ReadChunks<R> {
    fn next_chunk(&mut self) -> io::Result<Option<Bytes>> {
        self.buf.resize(self.chunk_size, 0);
        loop {
            match self.reader.read(&mut self.buf[..]) {
                Ok(0) => {
                    self.buf.clear();
                    return Ok(None);
                }
                Ok(n) => {
                    self.buf.truncate(n);
                    return Ok(Some(self.buf.split().freeze()));
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

/// Adapts an iterator of byte buffers into a [`ChunkSource`].
#[derive(Debug, Clone)]
pub struct IterChunks<I> {
    iter: I,
}

impl<I> IterChunks<I>
where
    I: Iterator,
    I::Item: AsRef<[u8]>,
{
    pub fn new<T>(chunks: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        IterChunks {
            iter: chunks.into_iter(),
        }
    }
}

impl<I> ChunkSource for IterChunks<I>
where
    I: Iterator,
    I::Item: AsRef<[u8]>,
{
    fn next_chunk(&mut self) -> io::Result<Option<Bytes>> {
        Ok(self
            .iter
            .next()
            .map(|chunk| Bytes::copy_from_slice(chunk.as_ref())))
    }
}
