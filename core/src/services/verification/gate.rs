//! Verification attempt gate
//!
//! Decides, for each verification attempt tied to an account, whether the
//! attempt may proceed, is rejected because the account is temporarily
//! blocked, or pushes the account into a block after too many failures.
//! Runs before the verification-code check and mutates the persisted
//! attempt record as a side effect.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use jp_shared::utils::email::mask_email;

use crate::domain::entities::account::AttemptState;
use crate::errors::DomainResult;
use crate::repositories::AccountRepository;

use super::policy::GatePolicy;

/// Outcome of asking the gate to admit a verification attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmitDecision {
    /// The caller may proceed to the verification-code check. The attempt
    /// has been counted and persisted.
    Allowed,

    /// No account holds the given email under any credential sub-record.
    /// Nothing was written.
    NotFound,

    /// The account has an active block. Nothing was written; the attempt
    /// is not counted. Minutes are computed from `blocked_until`, rounded
    /// up to the next whole minute.
    Blocked { retry_after_minutes: u32 },

    /// This attempt crossed the threshold and the account is now blocked.
    /// The rejection message quotes the policy's block duration directly
    /// rather than computing it back from the stored timestamp.
    ThresholdBlocked { block_minutes: u32 },
}

/// Per-account rate limiter for email verification attempts
///
/// The lookup, the counter mutation, and the save are separate round trips
/// to the account store. Two concurrent calls for the same account can
/// interleave and lose an increment; sequential calls are the correctness
/// contract here, matching the store's document-level write semantics.
pub struct VerificationGate<A>
where
    A: AccountRepository,
{
    /// Account store collaborator
    accounts: Arc<A>,
    /// Immutable gate policy
    policy: GatePolicy,
}

impl<A> VerificationGate<A>
where
    A: AccountRepository,
{
    /// Create a new gate with the given policy
    pub fn new(accounts: Arc<A>, policy: GatePolicy) -> Self {
        Self { accounts, policy }
    }

    /// Create a new gate with the default policy (5 attempts, 30 minute
    /// block, 15 minute reset window)
    pub fn with_defaults(accounts: Arc<A>) -> Self {
        Self::new(accounts, GatePolicy::default())
    }

    /// The policy this gate was constructed with
    pub fn policy(&self) -> &GatePolicy {
        &self.policy
    }

    /// Decide whether a verification attempt for `email` may proceed at
    /// instant `now`
    ///
    /// Side effects per decision:
    /// * `Allowed` - the attempt record was created or its counter
    ///   incremented, and `last_attempt` set to `now`; the save completed
    ///   before the decision was returned.
    /// * `ThresholdBlocked` - as for `Allowed`, plus `blocked_until` was
    ///   set to `now` + block duration.
    /// * `NotFound` / `Blocked` - no writes.
    ///
    /// A counter older than the reset window is overwritten to zero before
    /// incrementing. The gate does not consult `is_verified`: an already
    /// verified account that re-enters the flow is still counted.
    ///
    /// # Errors
    /// Propagates store lookup/save failures unchanged; no retry is
    /// performed and the record is left as it was before the call.
    pub async fn admit(&self, email: &str, now: DateTime<Utc>) -> DomainResult<AdmitDecision> {
        let Some(mut account) = self.accounts.find_by_email(email).await? else {
            debug!(email = %mask_email(email), "verification attempt for unknown email");
            return Ok(AdmitDecision::NotFound);
        };

        match account.attempt_state(now) {
            AttemptState::Blocked { blocked_until } => {
                let retry_after_minutes = minutes_until_ceil(now, blocked_until);
                debug!(
                    email = %mask_email(email),
                    retry_after_minutes,
                    "verification attempt rejected: account is blocked"
                );
                Ok(AdmitDecision::Blocked { retry_after_minutes })
            }

            AttemptState::Fresh => {
                // First attempt ever: create the record and admit without
                // a threshold check.
                account.begin_attempts(now);
                self.accounts.update(account).await?;
                Ok(AdmitDecision::Allowed)
            }

            AttemptState::Counting { count, last_attempt } => {
                let effective_prior = if now - last_attempt > self.policy.reset_window {
                    0
                } else {
                    count
                };
                let new_count = effective_prior + 1;
                account.record_attempt(new_count, now);

                if new_count > self.policy.max_attempts {
                    let blocked_until = now + self.policy.block_duration;
                    account.block_attempts_until(blocked_until, now);
                    self.accounts.update(account).await?;

                    warn!(
                        email = %mask_email(email),
                        attempts = new_count,
                        max_attempts = self.policy.max_attempts,
                        %blocked_until,
                        "verification attempts exceeded limit, account blocked"
                    );
                    return Ok(AdmitDecision::ThresholdBlocked {
                        block_minutes: self.policy.block_minutes(),
                    });
                }

                self.accounts.update(account).await?;
                Ok(AdmitDecision::Allowed)
            }
        }
    }
}

/// Minutes from `now` until `until`, rounded up to the next whole minute
fn minutes_until_ceil(now: DateTime<Utc>, until: DateTime<Utc>) -> u32 {
    let remaining_ms = (until - now).num_milliseconds().max(0);
    ((remaining_ms + 59_999) / 60_000) as u32
}
