//! Error types for the request handler

use thiserror::Error;

use crate::errors::XofError;
use crate::events::error_codes;

/// Errors produced while handling a request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    /// Engine or reader contract violation
    #[error("XOF error: {0}")]
    Xof(#[from] XofError),

    /// No engine under the handle
    #[error("Unknown engine handle: {0}")]
    UnknownEngine(u64),

    /// No reader under the handle
    #[error("Unknown reader handle: {0}")]
    UnknownReader(u64),

    /// Engine table is full
    #[error("Too many engines: max {max}")]
    TooManyEngines {
        /// Configured limit
        max: usize,
    },

    /// Reader table is full
    #[error("Too many readers: max {max}")]
    TooManyReaders {
        /// Configured limit
        max: usize,
    },

    /// Requested output above the per-request cap
    #[error("Read too large: {requested} > {max}")]
    ReadTooLarge {
        /// Requested byte count
        requested: usize,
        /// Configured limit
        max: usize,
    },

    /// Request could not be parsed
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// Configuration rejected
    #[error("Invalid handler config: {0}")]
    InvalidConfig(String),
}

impl HandlerError {
    /// Stable numeric code for the error response.
    pub fn error_code(&self) -> u32 {
        match self {
            Self::Xof(XofError::InvalidInputType(_)) => error_codes::INVALID_INPUT_TYPE,
            Self::Xof(XofError::InvalidKeyLength { .. }) => error_codes::INVALID_KEY_LENGTH,
            Self::Xof(XofError::PositionOutOfRange(_)) => error_codes::POSITION_OUT_OF_RANGE,
            Self::Xof(XofError::MissingArgument(_)) => error_codes::MISSING_ARGUMENT,
            Self::UnknownEngine(_) => error_codes::UNKNOWN_ENGINE,
            Self::UnknownReader(_) => error_codes::UNKNOWN_READER,
            Self::TooManyEngines { .. } => error_codes::TOO_MANY_ENGINES,
            Self::TooManyReaders { .. } => error_codes::TOO_MANY_READERS,
            Self::ReadTooLarge { .. } => error_codes::READ_TOO_LARGE,
            Self::MalformedRequest(_) => error_codes::MALFORMED_REQUEST,
            Self::InvalidConfig(_) => error_codes::INVALID_CONFIG,
        }
    }
}
