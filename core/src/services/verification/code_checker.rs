//! Verification-code checker collaborator
//!
//! The gate only decides whether an attempt may proceed; whether the
//! submitted code actually matches is owned by this seam. Code generation
//! and delivery live outside this crate entirely.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::DomainError;

/// Checks a submitted verification code for an email address
#[async_trait]
pub trait CodeVerifier: Send + Sync {
    /// Returns `Ok(true)` when the code is valid for the email,
    /// `Ok(false)` when it is wrong or expired
    async fn check_code(&self, email: &str, code: &str) -> Result<bool, DomainError>;
}

/// In-memory code verifier for tests and local development
pub struct MockCodeVerifier {
    codes: Arc<RwLock<HashMap<String, String>>>,
}

impl MockCodeVerifier {
    /// Create a verifier with no known codes
    pub fn new() -> Self {
        Self {
            codes: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register the expected code for an email
    pub async fn set_code(&self, email: impl Into<String>, code: impl Into<String>) {
        self.codes.write().await.insert(email.into(), code.into());
    }
}

impl Default for MockCodeVerifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CodeVerifier for MockCodeVerifier {
    async fn check_code(&self, email: &str, code: &str) -> Result<bool, DomainError> {
        let codes = self.codes.read().await;
        Ok(codes.get(email).map(|c| c == code).unwrap_or(false))
    }
}
