//! Chunked stream sources: sequences fed incrementally by a transport.
//!
//! A [`ChunkSource`] is the interface a transport implements to feed chunks
//! (string fragments, in whatever sizes the transport happens to produce)
//! into a [`StreamSequence`]. An HTTP transport, for example, delivers each
//! progress notification's freshly received bytes as one chunk. The core
//! never talks to a network itself; [`ReaderSource`] adapts any
//! [`std::io::Read`] for local use and for tests.
//!
//! Streams are single-pass: driving one consumes the transport, and transport
//! failures surface as `std::io::Error` untranslated.

use std::cell::RefCell;
use std::io;
use std::io::Read;

use log::trace;

use crate::sequence::Step;

/// A transport that pushes string chunks at a sink until it is exhausted.
///
/// Implementations must honor the stop sentinel: when the sink returns
/// [`Step::Stop`], the transport must cease producing promptly and release
/// whatever it holds. A transport backed by an in-flight request aborts the
/// request and unsubscribes.
pub trait ChunkSource {
    /// Feeds chunks to `sink` until exhaustion or a stop.
    fn drive(&mut self, sink: &mut dyn FnMut(&str) -> Step) -> io::Result<()>;
}

/// A sequence of chunks produced by a [`ChunkSource`].
pub struct StreamSequence<C> {
    source: RefCell<C>,
}

impl<C: ChunkSource> StreamSequence<C> {
    /// Wraps a chunk transport.
    pub fn new(source: C) -> Self {
        StreamSequence { source: RefCell::new(source) }
    }

    /// Feeds each chunk to `visitor` as it arrives.
    ///
    /// Returns [`Step::Stop`] when the visitor ended the stream early, and
    /// any transport error untranslated.
    pub fn each_chunk<F>(&self, mut visitor: F) -> io::Result<Step>
    where
        F: FnMut(String) -> Step,
    {
        let mut outcome = Step::Continue;
        self.source.borrow_mut().drive(&mut |chunk| {
            outcome = visitor(chunk.to_owned());
            outcome
        })?;
        Ok(outcome)
    }

    /// Collects every chunk.
    pub fn to_vec(&self) -> io::Result<Vec<String>> {
        let mut chunks = Vec::new();
        self.each_chunk(|chunk| {
            chunks.push(chunk);
            Step::Continue
        })?;
        Ok(chunks)
    }

    /// Splits each chunk on `\n` and emits the pieces flat.
    ///
    /// A line spanning two chunks is emitted as two fragments; pieces are
    /// never re-joined across a chunk boundary. Callers who need exact lines
    /// must ensure the transport chunks on line boundaries.
    pub fn lines(self) -> Lines<C> {
        Lines { stream: self }
    }
}

/// The line-oriented view of a chunked stream.
pub struct Lines<C> {
    stream: StreamSequence<C>,
}

impl<C: ChunkSource> Lines<C> {
    /// Feeds each line-piece to `visitor` as its chunk arrives.
    pub fn each_line<F>(&self, mut visitor: F) -> io::Result<Step>
    where
        F: FnMut(String) -> Step,
    {
        self.stream.each_chunk(|chunk| {
            for line in chunk.split('\n') {
                if visitor(line.to_owned()).is_stop() {
                    return Step::Stop;
                }
            }
            Step::Continue
        })
    }

    /// Collects every line-piece.
    pub fn to_vec(&self) -> io::Result<Vec<String>> {
        let mut lines = Vec::new();
        self.each_line(|line| {
            lines.push(line);
            Step::Continue
        })?;
        Ok(lines)
    }
}

/// A chunk transport over any reader, chunking at a fixed byte budget.
pub struct ReaderSource<R> {
    reader: R,
    chunk_bytes: usize,
}

impl<R: Read> ReaderSource<R> {
    /// Wraps a reader, delivering chunks of at most `chunk_bytes` bytes.
    ///
    /// # Panics
    ///
    /// Panics on a zero chunk budget.
    pub fn new(reader: R, chunk_bytes: usize) -> Self {
        assert!(chunk_bytes > 0, "chunk budget must be positive");
        ReaderSource { reader, chunk_bytes }
    }
}

impl<R: Read> ChunkSource for ReaderSource<R> {
    fn drive(&mut self, sink: &mut dyn FnMut(&str) -> Step) -> io::Result<()> {
        let mut buffer = vec![0u8; self.chunk_bytes];
        loop {
            let filled = self.reader.read(&mut buffer)?;
            if filled == 0 {
                return Ok(());
            }
            trace!("delivering a {filled} byte chunk");
            let chunk = String::from_utf8_lossy(&buffer[..filled]);
            if sink(&chunk).is_stop() {
                return Ok(());
            }
        }
    }
}
