//! # Mode Factory
//!
//! | Mode | Seed | Failure |
//! |------|------|---------|
//! | Standard | none | never |
//! | Keyed | 32-byte key | `InvalidKeyLength` |
//! | DeriveKey | context bytes (UTF-8) | `InvalidInputType` |

use tracing::debug;
use zeroize::Zeroizing;

use crate::engine::HashEngine;
use crate::errors::{Result, XofError};
use crate::primitive::{Blake3, Primitive, KEY_LEN};

/// Initialization mode of an engine, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// No key material
    Standard,
    /// Seeded with a secret 32-byte key
    Keyed,
    /// Seeded with public derivation context
    DeriveKey,
}

impl<P: Primitive> HashEngine<P> {
    /// Engine in standard mode.
    pub fn new_standard() -> Self {
        debug!(mode = ?Mode::Standard, "creating hash engine");
        Self::from_state(P::standard(), Mode::Standard)
    }

    /// Engine in keyed mode.
    ///
    /// # Errors
    ///
    /// Returns `XofError::InvalidKeyLength` unless `key` is exactly 32 bytes.
    pub fn new_keyed(key: impl AsRef<[u8]>) -> Result<Self> {
        let key = key.as_ref();
        if key.len() != KEY_LEN {
            return Err(XofError::InvalidKeyLength {
                expected: KEY_LEN,
                actual: key.len(),
            });
        }

        let mut key_bytes = Zeroizing::new([0u8; KEY_LEN]);
        key_bytes.copy_from_slice(key);

        debug!(mode = ?Mode::Keyed, "creating hash engine");
        Ok(Self::from_state(P::keyed(&key_bytes), Mode::Keyed))
    }

    /// Engine in key-derivation mode. The context may be empty.
    ///
    /// # Errors
    ///
    /// Returns `XofError::InvalidInputType` if `context` is not valid UTF-8,
    /// which BLAKE3 requires of derivation contexts.
    pub fn new_derive_key(context: impl AsRef<[u8]>) -> Result<Self> {
        let context = std::str::from_utf8(context.as_ref()).map_err(|e| {
            XofError::InvalidInputType(format!("derive-key context must be UTF-8: {}", e))
        })?;

        debug!(mode = ?Mode::DeriveKey, context_len = context.len(), "creating hash engine");
        Ok(Self::from_state(P::derive_key(context), Mode::DeriveKey))
    }
}

/// Standard-mode BLAKE3 engine.
pub fn create_standard() -> HashEngine<Blake3> {
    HashEngine::new_standard()
}

/// Keyed-mode BLAKE3 engine.
///
/// # Errors
///
/// Returns `XofError::InvalidKeyLength` unless `key` is exactly 32 bytes.
pub fn create_keyed(key: impl AsRef<[u8]>) -> Result<HashEngine<Blake3>> {
    HashEngine::new_keyed(key)
}

/// Key-derivation BLAKE3 engine.
///
/// Unlike BLAKE3's raw-context C API, the context must be valid UTF-8: the
/// `blake3` crate only accepts `&str` contexts, so byte strings that C
/// bindings would hash as-is are rejected here.
///
/// # Errors
///
/// Returns `XofError::InvalidInputType` if `context` is not valid UTF-8.
pub fn create_derive_key(context: impl AsRef<[u8]>) -> Result<HashEngine<Blake3>> {
    HashEngine::new_derive_key(context)
}
