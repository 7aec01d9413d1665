//! Events Layer - Request/Response Message Types
//!
//! Messages exchanged with [`XofHandler`](crate::handler::XofHandler).

pub mod requests;
pub mod responses;

pub use requests::XofRequest;
pub use responses::{error_codes, ErrorResponse, XofResponse};
