//! Email verification flow orchestration

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use jp_shared::utils::email::{mask_email, normalize_email};

use crate::errors::{DomainError, DomainResult};
use crate::repositories::AccountRepository;

use super::code_checker::CodeVerifier;
use super::gate::{AdmitDecision, VerificationGate};
use super::policy::GatePolicy;

/// Outcome of a full verify-email call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The code matched; the account is now verified
    Verified,
    /// The gate admitted the attempt but the code was wrong or expired.
    /// The attempt has been counted.
    InvalidCode,
    /// No account holds this email
    NotFound,
    /// The account has an active block
    Blocked { retry_after_minutes: u32 },
    /// This attempt crossed the threshold and started a block
    ThresholdBlocked { block_minutes: u32 },
}

/// Service running the complete verify-email flow: gate first, then the
/// code check, then the verified flag
pub struct VerificationService<A, V>
where
    A: AccountRepository,
    V: CodeVerifier,
{
    /// Account store for the final verified-flag update
    accounts: Arc<A>,
    /// Attempt gate, sharing the same account store
    gate: VerificationGate<A>,
    /// Verification-code checker collaborator
    verifier: Arc<V>,
}

impl<A, V> VerificationService<A, V>
where
    A: AccountRepository,
    V: CodeVerifier,
{
    /// Create a new verification service
    pub fn new(accounts: Arc<A>, verifier: Arc<V>, policy: GatePolicy) -> Self {
        let gate = VerificationGate::new(Arc::clone(&accounts), policy);
        Self {
            accounts,
            gate,
            verifier,
        }
    }

    /// The gate backing this service
    pub fn gate(&self) -> &VerificationGate<A> {
        &self.gate
    }

    /// Verify the code submitted for an email address
    ///
    /// The gate runs first and counts the attempt; only an admitted attempt
    /// reaches the code check. A matching code marks the account verified
    /// and persists it. The attempt record is not cleared on success; it
    /// simply stops being consulted.
    pub async fn verify_email(
        &self,
        email: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<VerifyOutcome> {
        let email = normalize_email(email);

        match self.gate.admit(&email, now).await? {
            AdmitDecision::NotFound => return Ok(VerifyOutcome::NotFound),
            AdmitDecision::Blocked { retry_after_minutes } => {
                return Ok(VerifyOutcome::Blocked { retry_after_minutes })
            }
            AdmitDecision::ThresholdBlocked { block_minutes } => {
                return Ok(VerifyOutcome::ThresholdBlocked { block_minutes })
            }
            AdmitDecision::Allowed => {}
        }

        if !self.verifier.check_code(&email, code).await? {
            return Ok(VerifyOutcome::InvalidCode);
        }

        let mut account = self
            .accounts
            .find_by_email(&email)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: "Account".to_string(),
            })?;
        account.verify();
        self.accounts.update(account).await?;

        info!(email = %mask_email(&email), "email verified");
        Ok(VerifyOutcome::Verified)
    }
}
