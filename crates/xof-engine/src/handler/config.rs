//! Handler configuration and validation
//!
//! # Example
//!
//! ```
//! use xof_engine::handler::HandlerConfigBuilder;
//!
//! let config = HandlerConfigBuilder::new()
//!     .max_engines(16)
//!     .max_readers(64)
//!     .max_read_length(1 << 20)
//!     .build()
//!     .expect("valid config");
//! assert_eq!(config.max_engines, 16);
//! ```

use serde::{Deserialize, Serialize};

use super::error::HandlerError;
use crate::engine::DEFAULT_HASH_LENGTH;

/// Limits enforced by [`XofHandler`](super::XofHandler).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerConfig {
    /// Maximum live engines
    pub max_engines: usize,
    /// Maximum live readers
    pub max_readers: usize,
    /// Maximum bytes produced by a single digest or read request
    pub max_read_length: usize,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            max_engines: 1024,
            max_readers: 4096,
            max_read_length: 16 * 1024 * 1024, // 16 MiB
        }
    }
}

impl HandlerConfig {
    /// Create a new configuration with validation
    pub fn new(
        max_engines: usize,
        max_readers: usize,
        max_read_length: usize,
    ) -> Result<Self, HandlerError> {
        let config = Self {
            max_engines,
            max_readers,
            max_read_length,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate limits
    pub fn validate(&self) -> Result<(), HandlerError> {
        if self.max_engines == 0 {
            return Err(HandlerError::InvalidConfig(
                "max_engines cannot be 0".to_string(),
            ));
        }

        if self.max_readers == 0 {
            return Err(HandlerError::InvalidConfig(
                "max_readers cannot be 0".to_string(),
            ));
        }

        // a default-length digest must always be servable
        if self.max_read_length < DEFAULT_HASH_LENGTH {
            return Err(HandlerError::InvalidConfig(format!(
                "max_read_length must be at least {}",
                DEFAULT_HASH_LENGTH
            )));
        }

        Ok(())
    }
}

/// Builder for HandlerConfig with validation
#[derive(Default)]
pub struct HandlerConfigBuilder {
    max_engines: Option<usize>,
    max_readers: Option<usize>,
    max_read_length: Option<usize>,
}

impl HandlerConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum live engines
    pub fn max_engines(mut self, max: usize) -> Self {
        self.max_engines = Some(max);
        self
    }

    /// Set maximum live readers
    pub fn max_readers(mut self, max: usize) -> Self {
        self.max_readers = Some(max);
        self
    }

    /// Set per-request output cap in bytes
    pub fn max_read_length(mut self, bytes: usize) -> Self {
        self.max_read_length = Some(bytes);
        self
    }

    /// Build the HandlerConfig, validating all parameters
    pub fn build(self) -> Result<HandlerConfig, HandlerError> {
        let defaults = HandlerConfig::default();

        let config = HandlerConfig {
            max_engines: self.max_engines.unwrap_or(defaults.max_engines),
            max_readers: self.max_readers.unwrap_or(defaults.max_readers),
            max_read_length: self.max_read_length.unwrap_or(defaults.max_read_length),
        };

        config.validate()?;
        Ok(config)
    }
}
