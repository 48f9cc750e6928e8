//! Configuration module
//!
//! Business configuration lives here so both the domain layer and the API
//! layer can load the same values:
//! - `verification` - Limits for the email verification attempt gate

pub mod verification;

pub use verification::VerificationLimits;
