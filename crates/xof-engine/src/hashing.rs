//! # One-shot Hashing
//!
//! Convenience wrappers that build an engine, absorb one input and digest
//! it. Use [`HashEngine`](crate::HashEngine) directly for incremental input
//! or seekable output.

use crate::engine::DEFAULT_HASH_LENGTH;
use crate::errors::Result;
use crate::modes::{create_derive_key, create_keyed, create_standard};

/// Default-length hash output (256-bit).
pub type Hash = [u8; DEFAULT_HASH_LENGTH];

/// Hash data in standard mode (one-shot).
pub fn hash(data: &[u8]) -> Hash {
    let mut out = [0u8; DEFAULT_HASH_LENGTH];
    let mut engine = create_standard();
    engine.update(data).digest_into(&mut out);
    out
}

/// Hash data in standard mode with a custom output length.
pub fn hash_with_length(data: &[u8], length: usize) -> Vec<u8> {
    let mut engine = create_standard();
    engine.update(data);
    engine.digest_with_length(length)
}

/// Keyed hash (MAC).
///
/// # Errors
///
/// Returns `XofError::InvalidKeyLength` unless `key` is exactly 32 bytes.
pub fn keyed_hash(key: &[u8], data: &[u8]) -> Result<Hash> {
    let mut out = [0u8; DEFAULT_HASH_LENGTH];
    let mut engine = create_keyed(key)?;
    engine.update(data).digest_into(&mut out);
    Ok(out)
}

/// Derive a 32-byte key from context and input key material.
///
/// # Errors
///
/// Returns `XofError::InvalidInputType` if `context` is not valid UTF-8.
pub fn derive_key(context: &[u8], key_material: &[u8]) -> Result<[u8; 32]> {
    let mut out = [0u8; 32];
    let mut engine = create_derive_key(context)?;
    engine.update(key_material).digest_into(&mut out);
    Ok(out)
}
