//! # Output Primitive
//!
//! The compression function and tree construction live in the `blake3`
//! crate. The engine only relies on the contract captured by [`Primitive`]:
//!
//! - state is a plain value, `clone()` is a deep independent snapshot
//! - `absorb` appends input in call order
//! - `output` is a pure function of `(state, position, out.len())`

/// Keyed-mode key length in bytes.
pub const KEY_LEN: usize = blake3::KEY_LEN;

/// Extendable-output hash state.
pub trait Primitive: Clone + Send + Sync {
    /// Fresh state with no key material.
    fn standard() -> Self;

    /// Fresh state seeded with a 32-byte key.
    fn keyed(key: &[u8; KEY_LEN]) -> Self;

    /// Fresh state for key-derivation mode under `context`.
    fn derive_key(context: &str) -> Self;

    /// Append `data` to the absorbed input.
    fn absorb(&mut self, data: &[u8]);

    /// Fill `out` with keystream bytes starting at `position`.
    ///
    /// Callers guarantee `position + out.len()` does not exceed `u64::MAX`.
    fn output(&self, position: u64, out: &mut [u8]);
}

/// BLAKE3 state backed by [`blake3::Hasher`].
#[derive(Clone)]
pub struct Blake3 {
    inner: blake3::Hasher,
}

impl Primitive for Blake3 {
    fn standard() -> Self {
        Self {
            inner: blake3::Hasher::new(),
        }
    }

    fn keyed(key: &[u8; KEY_LEN]) -> Self {
        Self {
            inner: blake3::Hasher::new_keyed(key),
        }
    }

    fn derive_key(context: &str) -> Self {
        Self {
            inner: blake3::Hasher::new_derive_key(context),
        }
    }

    fn absorb(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    fn output(&self, position: u64, out: &mut [u8]) {
        if out.is_empty() {
            return;
        }
        let mut reader = self.inner.finalize_xof();
        reader.set_position(position);
        reader.fill(out);
    }
}

impl std::fmt::Debug for Blake3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Blake3").finish_non_exhaustive()
    }
}
