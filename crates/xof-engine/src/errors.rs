//! XOF engine error types.

use thiserror::Error;

/// Errors raised by the engine, its readers and the mode factory.
///
/// Every variant is a caller contract violation. None of them leave an
/// engine or reader partially mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XofError {
    /// An argument expected to be byte data was not
    #[error("Invalid input type: {0}")]
    InvalidInputType(String),

    /// Invalid key length
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length in bytes
        actual: usize,
    },

    /// Seek target not representable within `[0, 2^64 - 1]`
    #[error("Position out of range: {0} (must be within [0, 18446744073709551615])")]
    PositionOutOfRange(String),

    /// A required argument was omitted
    #[error("Missing argument: {0}")]
    MissingArgument(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, XofError>;

impl From<XofError> for std::io::Error {
    fn from(err: XofError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    }
}
