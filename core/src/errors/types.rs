//! Verification-specific error types
//!
//! User-facing message text for these errors is owned by the presentation
//! layer; the variants here only carry what the API needs to choose a
//! response.

use thiserror::Error;

/// Errors raised by the verification-code check
#[derive(Error, Debug)]
pub enum VerificationError {
    #[error("Invalid verification code")]
    InvalidCode,

    #[error("Verification code expired")]
    CodeExpired,
}
