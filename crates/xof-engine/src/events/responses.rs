//! Response Messages

use serde::{Deserialize, Serialize};

/// Reply produced by [`XofHandler`](crate::handler::XofHandler).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum XofResponse {
    /// New engine handle
    EngineCreated {
        /// Engine handle
        engine: u64,
    },
    /// New reader handle
    ReaderCreated {
        /// Reader handle
        reader: u64,
    },
    /// Input absorbed
    Updated {
        /// Engine handle
        engine: u64,
    },
    /// Output bytes
    Bytes {
        /// Output
        data: Vec<u8>,
    },
    /// Caller buffer filled
    Written {
        /// Number of bytes written into the buffer
        bytes_written: usize,
        /// The buffer, with the first `bytes_written` bytes replaced
        buffer: Vec<u8>,
    },
    /// Reader cursor
    Position {
        /// Cursor value
        position: u64,
    },
    /// Pull-sequence step
    Chunk {
        /// Chunk bytes, empty when pulled at the ceiling
        data: Vec<u8>,
        /// Whether the cursor has reached the ceiling, set on the step that
        /// reaches it
        done: bool,
    },
    /// Handle released
    Dropped,
    /// Request rejected
    Error(ErrorResponse),
}

/// Error response
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code
    pub error_code: u32,
    /// Error message
    pub error_message: String,
}

/// Error codes for handler operations
pub mod error_codes {
    /// Argument was not byte data
    pub const INVALID_INPUT_TYPE: u32 = 9001;
    /// Keyed-mode key was not 32 bytes
    pub const INVALID_KEY_LENGTH: u32 = 9002;
    /// Position not representable as u64
    pub const POSITION_OUT_OF_RANGE: u32 = 9003;
    /// Required argument omitted
    pub const MISSING_ARGUMENT: u32 = 9004;
    /// No engine under that handle
    pub const UNKNOWN_ENGINE: u32 = 9010;
    /// No reader under that handle
    pub const UNKNOWN_READER: u32 = 9011;
    /// Engine table full
    pub const TOO_MANY_ENGINES: u32 = 9012;
    /// Reader table full
    pub const TOO_MANY_READERS: u32 = 9013;
    /// Requested output exceeds the per-request cap
    pub const READ_TOO_LARGE: u32 = 9014;
    /// Request could not be parsed
    pub const MALFORMED_REQUEST: u32 = 9020;
    /// Handler configuration rejected
    pub const INVALID_CONFIG: u32 = 9030;
}
