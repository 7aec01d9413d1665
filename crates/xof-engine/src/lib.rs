//! # XOF Engine - Seekable Extendable-Output Hashing
//!
//! Incremental BLAKE3 hashing whose output is an addressable keystream of
//! `2^64 - 1` bytes rather than a single digest.
//!
//! ## Components
//!
//! | Module | Type | Role |
//! |--------|------|------|
//! | `modes` | `create_standard` / `create_keyed` / `create_derive_key` | Mode factory |
//! | `engine` | `HashEngine` | Absorbs input, digests from position 0 |
//! | `reader` | `SeekableReader`, `Chunks` | Cursor over a state snapshot |
//! | `primitive` | `Primitive`, `Blake3` | Output function seam |
//! | `hashing` | `hash`, `keyed_hash`, `derive_key` | One-shot helpers |
//! | `handler` | `XofHandler` | Dynamic request boundary |
//!
//! ## Invariants
//!
//! - `update(a); update(b)` digests exactly like `update(a ++ b)`
//! - a reader never observes engine updates made after its creation
//! - a reader cursor never exceeds `MAX_HASH_POSITION`; reads past it truncate
//!
//! ## Usage
//!
//! ```
//! use xof_engine::{create_standard, MAX_HASH_POSITION};
//!
//! let mut engine = create_standard();
//! engine.update(b"hello").update(b" world");
//! let digest = engine.digest();
//!
//! let mut reader = engine.reader();
//! assert_eq!(reader.read(32), digest);
//!
//! reader.set_position(MAX_HASH_POSITION - 4);
//! assert_eq!(reader.read(1024).len(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod errors;
pub mod events;
pub mod handler;
pub mod hashing;
pub mod modes;
pub mod primitive;
pub mod reader;
pub mod telemetry;

// Re-exports
pub use engine::{HashEngine, DEFAULT_HASH_LENGTH};
pub use errors::{Result, XofError};
pub use events::{XofRequest, XofResponse};
pub use handler::{HandlerConfig, HandlerConfigBuilder, HandlerError, XofHandler};
pub use hashing::{derive_key, hash, hash_with_length, keyed_hash, Hash};
pub use modes::{create_derive_key, create_keyed, create_standard, Mode};
pub use primitive::{Blake3, Primitive, KEY_LEN};
pub use reader::{Chunks, SeekableReader, ITERATOR_STEP_SIZE, MAX_HASH_POSITION};
pub use telemetry::{init_logging, LogConfig, TelemetryError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
