//! # Seekable Reader
//!
//! A reader owns a snapshot of an engine's state and a 64-bit cursor into
//! the keystream it defines.
//!
//! ## Invariants
//!
//! - `position <= MAX_HASH_POSITION` at all times
//! - reads never move the cursor past `MAX_HASH_POSITION`; requests that
//!   would are truncated to what remains, not rejected
//! - `read`, `read_into`, [`Chunks`] and the `io` impls share one cursor, so
//!   interleaving them yields one continuous stream

use std::io::{self, Read, Seek, SeekFrom};
use std::iter::FusedIterator;

use tracing::trace;

use crate::engine::DEFAULT_HASH_LENGTH;
use crate::errors::{Result, XofError};
use crate::primitive::{Blake3, Primitive};

/// Highest addressable keystream position, `2^64 - 1`.
pub const MAX_HASH_POSITION: u64 = u64::MAX;

/// Chunk size of the pull sequence returned by [`SeekableReader::chunks`].
pub const ITERATOR_STEP_SIZE: usize = 1024;

/// Positional reader over a keystream snapshot.
#[derive(Clone)]
pub struct SeekableReader<P: Primitive = Blake3> {
    snapshot: P,
    position: u64,
}

impl<P: Primitive> SeekableReader<P> {
    pub(crate) fn new(snapshot: P) -> Self {
        trace!("reader created");
        Self {
            snapshot,
            position: 0,
        }
    }

    /// Current cursor.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Move the cursor. Every `u64` is a valid position.
    pub fn set_position(&mut self, position: u64) {
        self.position = position;
    }

    /// Move the cursor from a signed or wider integer.
    ///
    /// # Errors
    ///
    /// Returns `XofError::PositionOutOfRange` if `position` does not fit in a
    /// `u64`. The cursor is left unchanged.
    pub fn try_set_position<T>(&mut self, position: T) -> Result<()>
    where
        T: TryInto<u64> + Copy + std::fmt::Display,
    {
        let converted = position
            .try_into()
            .map_err(|_| XofError::PositionOutOfRange(position.to_string()))?;
        self.set_position(converted);
        Ok(())
    }

    /// Bytes left before the cursor reaches [`MAX_HASH_POSITION`].
    pub fn remaining(&self) -> u64 {
        MAX_HASH_POSITION - self.position
    }

    /// Whether the cursor sits at the ceiling.
    pub fn is_exhausted(&self) -> bool {
        self.position == MAX_HASH_POSITION
    }

    /// Read up to `n` bytes and advance the cursor.
    ///
    /// Fewer than `n` bytes are returned only when the ceiling is reached.
    pub fn read(&mut self, n: usize) -> Vec<u8> {
        let actual = self.clamp(n);
        let mut out = vec![0u8; actual];
        self.fill(&mut out);
        out
    }

    /// Fill as much of `buffer` as the ceiling allows and advance the
    /// cursor. Returns the number of bytes written.
    pub fn read_into(&mut self, buffer: &mut [u8]) -> usize {
        let actual = self.clamp(buffer.len());
        self.fill(&mut buffer[..actual]);
        actual
    }

    /// Lazy pull sequence of [`ITERATOR_STEP_SIZE`]-byte chunks starting at
    /// the current cursor.
    pub fn chunks(&mut self) -> Chunks<'_, P> {
        Chunks { reader: self }
    }

    /// Rewind to 0 and render the first 32 bytes as hex.
    ///
    /// The cursor is left just past the rendered bytes.
    pub fn to_hex(&mut self) -> String {
        self.position = 0;
        hex::encode(self.read(DEFAULT_HASH_LENGTH))
    }

    fn clamp(&self, requested: usize) -> usize {
        let requested = u64::try_from(requested).unwrap_or(u64::MAX);
        let remaining = self.remaining();
        if requested > remaining {
            trace!(position = self.position, requested, remaining, "read truncated at ceiling");
            // remaining < requested, which came from a usize
            remaining as usize
        } else {
            requested as usize
        }
    }

    fn fill(&mut self, out: &mut [u8]) {
        self.snapshot.output(self.position, out);
        self.position += out.len() as u64;
        trace!(position = self.position, read = out.len(), "reader advanced");
    }
}

impl<P: Primitive> Read for SeekableReader<P> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.read_into(buf))
    }
}

impl<P: Primitive> Seek for SeekableReader<P> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let target = match pos {
            SeekFrom::Start(offset) => Some(offset),
            SeekFrom::End(offset) => MAX_HASH_POSITION.checked_add_signed(offset),
            SeekFrom::Current(offset) => self.position.checked_add_signed(offset),
        };
        let target = target.ok_or_else(|| XofError::PositionOutOfRange(format!("{:?}", pos)))?;
        self.set_position(target);
        Ok(target)
    }

    fn stream_position(&mut self) -> io::Result<u64> {
        Ok(self.position)
    }
}

impl<P: Primitive> std::fmt::Debug for SeekableReader<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeekableReader")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

/// Pull sequence over a reader's keystream.
///
/// Each call to `next` reads one chunk at the reader's cursor. The sequence
/// ends once the cursor reaches [`MAX_HASH_POSITION`]; the last chunk is
/// truncated to the bytes that remain. Dropping and recreating the sequence
/// resumes from wherever the cursor is, it never restarts at 0.
pub struct Chunks<'a, P: Primitive = Blake3> {
    reader: &'a mut SeekableReader<P>,
}

impl<P: Primitive> Iterator for Chunks<'_, P> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.reader.is_exhausted() {
            return None;
        }
        Some(self.reader.read(ITERATOR_STEP_SIZE))
    }
}

impl<P: Primitive> FusedIterator for Chunks<'_, P> {}
