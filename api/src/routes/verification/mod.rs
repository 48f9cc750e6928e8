//! Email verification route handlers

pub mod verify_email;

pub use verify_email::AppState;
