//! Request Messages
//!
//! Argument fields are loosely typed JSON values so the handler can tell an
//! omitted argument (`MissingArgument`) apart from one of the wrong shape
//! (`InvalidInputType`). Handles are plain `u64` ids.
//!
//! Byte data is a JSON array of integers in `0..=255`. Positions are JSON
//! integers or decimal strings (for clients whose numbers are not 64-bit).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request addressed to an [`XofHandler`](crate::handler::XofHandler).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum XofRequest {
    /// Create a standard-mode engine
    CreateStandard,

    /// Create a keyed-mode engine
    CreateKeyed {
        /// 32-byte key
        key: Option<Value>,
    },

    /// Create a key-derivation engine
    CreateDeriveKey {
        /// Context bytes
        context: Option<Value>,
    },

    /// Absorb bytes into an engine
    Update {
        /// Engine handle
        engine: u64,
        /// Input bytes
        data: Option<Value>,
    },

    /// Digest an engine's input (default length 32)
    Digest {
        /// Engine handle
        engine: u64,
        /// Output length in bytes
        length: Option<Value>,
    },

    /// Snapshot an engine into a new reader
    CreateReader {
        /// Engine handle
        engine: u64,
    },

    /// Read bytes at a reader's cursor
    Read {
        /// Reader handle
        reader: u64,
        /// Number of bytes requested
        length: Option<Value>,
    },

    /// Fill a caller buffer at a reader's cursor
    ReadInto {
        /// Reader handle
        reader: u64,
        /// Buffer whose length is the read capacity
        buffer: Option<Value>,
    },

    /// Query a reader's cursor
    GetPosition {
        /// Reader handle
        reader: u64,
    },

    /// Seek a reader's cursor
    SetPosition {
        /// Reader handle
        reader: u64,
        /// Target position
        position: Option<Value>,
    },

    /// Pull the next chunk of a reader's pull sequence
    NextChunk {
        /// Reader handle
        reader: u64,
    },

    /// Release an engine
    DropEngine {
        /// Engine handle
        engine: u64,
    },

    /// Release a reader
    DropReader {
        /// Reader handle
        reader: u64,
    },
}

impl XofRequest {
    /// Operation name, as it appears in the `op` tag.
    pub fn op_name(&self) -> &'static str {
        match self {
            Self::CreateStandard => "create_standard",
            Self::CreateKeyed { .. } => "create_keyed",
            Self::CreateDeriveKey { .. } => "create_derive_key",
            Self::Update { .. } => "update",
            Self::Digest { .. } => "digest",
            Self::CreateReader { .. } => "create_reader",
            Self::Read { .. } => "read",
            Self::ReadInto { .. } => "read_into",
            Self::GetPosition { .. } => "get_position",
            Self::SetPosition { .. } => "set_position",
            Self::NextChunk { .. } => "next_chunk",
            Self::DropEngine { .. } => "drop_engine",
            Self::DropReader { .. } => "drop_reader",
        }
    }
}
