//! Email verification services
//!
//! This module provides the verification attempt gate and its surrounding
//! flow:
//! - Per-account rate limiting of verification attempts
//! - Time-windowed reset of the failure counter
//! - Temporary blocking after too many failures
//! - Orchestration of the gate with the verification-code check

mod code_checker;
mod gate;
mod policy;
mod service;


pub use code_checker::{CodeVerifier, MockCodeVerifier};
pub use gate::{AdmitDecision, VerificationGate};
pub use policy::GatePolicy;
pub use service::{VerificationService, VerifyOutcome};
