//! Shared utilities and common types for the JobPath server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Response structures matching the wire contract
//! - Utility functions (email validation, etc.)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::VerificationLimits;
pub use types::StatusResponse;
pub use utils::email;
