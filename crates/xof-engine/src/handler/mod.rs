//! Handler Layer - request dispatch at the dynamic boundary
//!
//! Validates loosely typed requests, enforces [`HandlerConfig`] limits and
//! routes them to engines and readers held under `u64` handles.

mod args;
pub mod config;
pub mod error;
pub mod xof_handler;

pub use config::{HandlerConfig, HandlerConfigBuilder};
pub use error::HandlerError;
pub use xof_handler::XofHandler;
