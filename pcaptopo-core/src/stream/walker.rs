//! Incremental capture walker.

use std::io::Read;

use tracing::{debug, trace};

use crate::error::Result;
use crate::pcap::{
    parse_capture_header, CaptureHeader, RecordHeader, GLOBAL_HEADER_SIZE, RECORD_HEADER_SIZE,
};
use crate::protocol::{decode_endpoints, Endpoints};

use super::accumulator::ByteAccumulator;
use super::source::{ChunkSource, ReadChunks};

/// One IPv4 packet observed by the streaming walker.
pub type StreamPacket = Endpoints;

/// Position of a [`CaptureStream`] in the capture layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    AwaitingGlobalHeader,
    AwaitingRecordHeader,
    AwaitingRecordPayload { captured_len: usize },
    /// Terminal: end of input, an incomplete structure, or a reported error
    Exhausted,
}

enum Step {
    Yield(StreamPacket),
    Continue,
    Done,
}

/// Lazily walks a chunked capture, yielding one [`StreamPacket`] per IPv4
/// record as soon as the record is complete.
///
/// No hostname extraction or aggregation happens here; feed the packets to a
/// [`TopologyBuilder`](crate::topology::TopologyBuilder) if counts are needed.
///
/// The only error produced for capture content is a bad global header, which
/// is yielded once before the iterator ends. A source that ends anywhere else,
/// including mid-record, simply ends the iteration.
///
/// # Example
///
/// ```
/// use pcaptopo_core::stream::{parse_capture_stream, IterChunks};
///
/// // Empty input ends quietly
/// let mut stream = parse_capture_stream(IterChunks::new(Vec::<Vec<u8>>::new()));
/// assert!(stream.next().is_none());
/// ```
#[derive(Debug)]
pub struct CaptureStream<S> {
    source: S,
    pending: ByteAccumulator,
    state: StreamState,
    header: Option<CaptureHeader>,
    records: u64,
}

/// Start walking a capture supplied by `source`.
pub fn parse_capture_stream<S: ChunkSource>(source: S) -> CaptureStream<S> {
    CaptureStream::new(source)
}

/// Walk a capture read from `reader` in [`DEFAULT_CHUNK_SIZE`](super::DEFAULT_CHUNK_SIZE) chunks.
pub fn parse_capture_reader<R: Read>(reader: R) -> CaptureStream<ReadChunks<R>> {
    CaptureStream::new(ReadChunks::new(reader))
}

impl<S: ChunkSource> CaptureStream<S> {
    pub fn new(source: S) -> Self {
        CaptureStream {
            source,
            pending: ByteAccumulator::new(),
            state: StreamState::AwaitingGlobalHeader,
            header: None,
            records: 0,
        }
    }

    pub fn state(&self) -> StreamState {
        self.state
    }

    /// The global header, once it has been read.
    pub fn header(&self) -> Option<&CaptureHeader> {
        self.header.as_ref()
    }

    /// Complete records consumed so far.
    pub fn records(&self) -> u64 {
        self.records
    }

    fn finish(&mut self, reason: &'static str) -> Step {
        debug!(
            records = self.records,
            pending = self.pending.len(),
            reason,
            "Capture stream exhausted"
        );
        self.state = StreamState::Exhausted;
        Step::Done
    }

    fn step(&mut self) -> Result<Step> {
        match self.state {
            StreamState::AwaitingGlobalHeader => {
                if !self.pending.ensure(GLOBAL_HEADER_SIZE, &mut self.source)? {
                    return Ok(self.finish("incomplete global header"));
                }
                let header = parse_capture_header(self.pending.peek())?;
                self.pending.consume(GLOBAL_HEADER_SIZE);
                self.header = Some(header);
                self.state = StreamState::AwaitingRecordHeader;
                Ok(Step::Continue)
            }
            StreamState::AwaitingRecordHeader => {
                if !self.pending.ensure(RECORD_HEADER_SIZE, &mut self.source)? {
                    return Ok(self.finish("end of input"));
                }
                let record = match &self.header {
                    Some(header) => RecordHeader::parse(self.pending.peek(), header),
                    None => None,
                };
                let Some(record) = record else {
                    return Ok(self.finish("record header unavailable"));
                };
                self.pending.consume(RECORD_HEADER_SIZE);
                self.state = StreamState::AwaitingRecordPayload {
                    captured_len: record.captured_len as usize,
                };
                Ok(Step::Continue)
            }
            StreamState::AwaitingRecordPayload { captured_len } => {
                if !self.pending.ensure(captured_len, &mut self.source)? {
                    return Ok(self.finish("incomplete record payload"));
                }
                let frame = self.pending.consume(captured_len);
                self.records += 1;
                self.state = StreamState::AwaitingRecordHeader;

                match decode_endpoints(&frame) {
                    Some(packet) => Ok(Step::Yield(packet)),
                    None => {
                        trace!(record = self.records, "Skipping non-IPv4 record");
                        Ok(Step::Continue)
                    }
                }
            }
            StreamState::Exhausted => Ok(Step::Done),
        }
    }
}

impl<S: ChunkSource> Iterator for CaptureStream<S> {
    type Item = Result<StreamPacket>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.step() {
                Ok(Step::Yield(packet)) => return Some(Ok(packet)),
                Ok(Step::Continue) => continue,
                Ok(Step::Done) => return None,
                Err(e) => {
                    self.state = StreamState::Exhausted;
                    return Some(Err(e));
                }
            }
        }
    }
}
