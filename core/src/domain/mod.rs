//! Domain layer: entities and value objects.

pub mod entities;

pub use entities::account::{
    Account, AttemptState, GoogleIdentity, LocalIdentity, VerificationAttempts,
};
