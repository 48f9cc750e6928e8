//! Type definitions shared across the server
//!
//! - `response` - API response wrappers matching the frontend wire contract

pub mod response;

pub use response::StatusResponse;
