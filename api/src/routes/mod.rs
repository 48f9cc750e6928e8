//! Route handlers
//!
//! - `verification` - Email verification endpoint consumed by the frontend

pub mod verification;

pub use verification::AppState;
