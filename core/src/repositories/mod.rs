//! Repository interfaces for persistence, with in-memory mocks for tests
//! and local development.

pub mod account;

pub use account::{AccountRepository, MockAccountRepository};
