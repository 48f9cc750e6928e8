//! Domain entities

pub mod account;

pub use account::{Account, AttemptState, GoogleIdentity, LocalIdentity, VerificationAttempts};
