//! # Hash Engine
//!
//! Accumulates input and derives output from position 0 of the keystream.
//! Engines are created through the mode factory (see [`crate::modes`]).
//!
//! `digest` never consumes the engine: output always reflects the full
//! cumulative input absorbed so far, and further `update` calls remain
//! valid afterwards.

use std::io::{self, Read, Write};

use tracing::trace;

use crate::modes::Mode;
use crate::primitive::{Blake3, Primitive};
use crate::reader::SeekableReader;

/// Default digest length in bytes.
pub const DEFAULT_HASH_LENGTH: usize = 32;

/// Incremental hashing engine over a [`Primitive`] state.
#[derive(Clone)]
pub struct HashEngine<P: Primitive = Blake3> {
    state: P,
    mode: Mode,
}

impl<P: Primitive> HashEngine<P> {
    pub(crate) fn from_state(state: P, mode: Mode) -> Self {
        Self { state, mode }
    }

    /// Absorb `data`. Zero-length input is a no-op.
    pub fn update(&mut self, data: impl AsRef<[u8]>) -> &mut Self {
        let data = data.as_ref();
        if !data.is_empty() {
            self.state.absorb(data);
        }
        self
    }

    /// Absorb everything `source` yields until EOF.
    ///
    /// Returns the number of bytes absorbed.
    pub fn update_reader<R: Read>(&mut self, mut source: R) -> io::Result<u64> {
        io::copy(&mut source, self)
    }

    /// Digest of [`DEFAULT_HASH_LENGTH`] bytes.
    pub fn digest(&self) -> Vec<u8> {
        self.digest_with_length(DEFAULT_HASH_LENGTH)
    }

    /// Digest of exactly `length` bytes taken from position 0.
    pub fn digest_with_length(&self, length: usize) -> Vec<u8> {
        let mut out = vec![0u8; length];
        self.digest_into(&mut out);
        out
    }

    /// Fill `out` with keystream bytes from position 0.
    pub fn digest_into(&self, out: &mut [u8]) {
        trace!(mode = ?self.mode, length = out.len(), "digest");
        self.state.output(0, out);
    }

    /// Lowercase hex rendering of a `length`-byte digest.
    pub fn digest_hex(&self, length: usize) -> String {
        hex::encode(self.digest_with_length(length))
    }

    /// New reader over a snapshot of the current state, positioned at 0.
    ///
    /// Later updates to this engine are not visible to the reader.
    pub fn reader(&self) -> SeekableReader<P> {
        SeekableReader::new(self.state.clone())
    }
}

impl<P: Primitive> Write for HashEngine<P> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<P: Primitive> std::fmt::Debug for HashEngine<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashEngine")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
