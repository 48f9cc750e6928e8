//! Account entity representing a registered user in the JobPath system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use jp_shared::utils::email::normalize_email;

/// Local (email + password) credential sub-record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalIdentity {
    /// Email address used for login
    pub email: String,

    /// Bcrypt hash of the password; absent for accounts created through
    /// an OAuth provider that later attached a local email
    pub password_hash: Option<String>,
}

/// Google OAuth credential sub-record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleIdentity {
    /// Email address reported by the OAuth provider
    pub email: String,

    /// Provider-side subject identifier
    pub provider_id: String,
}

/// Bookkeeping for failed/attempted email verifications
///
/// Created lazily on the first attempt; it does not exist at signup.
/// Once `Account::is_verified` becomes true the record stops being
/// consulted but is not cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationAttempts {
    /// Attempts counted since the last reset
    pub count: u32,

    /// When `count` was last incremented
    pub last_attempt: DateTime<Utc>,

    /// If present and in the future, the account is blocked
    pub blocked_until: Option<DateTime<Utc>>,
}

impl VerificationAttempts {
    /// Record for the very first attempt against an account
    pub fn first(now: DateTime<Utc>) -> Self {
        Self {
            count: 1,
            last_attempt: now,
            blocked_until: None,
        }
    }
}

/// Attempt-record state as an exhaustive tagged variant
///
/// The persisted shape is a pair of nullable fields; this view forces every
/// consumer to handle all three branches explicitly. An expired block maps
/// to `Counting` since the block no longer applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptState {
    /// No attempt record exists yet
    Fresh,
    /// Attempts are being counted inside the reset window
    Counting {
        count: u32,
        last_attempt: DateTime<Utc>,
    },
    /// An active block rejects all attempts until the given instant
    Blocked { blocked_until: DateTime<Utc> },
}

/// Account entity addressable by email across credential sub-records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Local credential, if the account has one
    pub local: Option<LocalIdentity>,

    /// Google OAuth credential, if the account has one
    pub google: Option<GoogleIdentity>,

    /// Whether the account's email has been verified
    pub is_verified: bool,

    /// Verification attempt bookkeeping (absent until the first attempt)
    pub verification_attempts: Option<VerificationAttempts>,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new account with a local credential
    pub fn new_local(email: impl Into<String>, password_hash: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            local: Some(LocalIdentity {
                email: normalize_email(&email.into()),
                password_hash,
            }),
            google: None,
            is_verified: false,
            verification_attempts: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a new account from a Google OAuth identity
    pub fn new_google(email: impl Into<String>, provider_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            local: None,
            google: Some(GoogleIdentity {
                email: normalize_email(&email.into()),
                provider_id: provider_id.into(),
            }),
            is_verified: false,
            verification_attempts: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks whether the given email matches any credential sub-record
    ///
    /// Local and Google emails are equivalent identities for lookup.
    pub fn matches_email(&self, email: &str) -> bool {
        let needle = normalize_email(email);
        self.local
            .as_ref()
            .map(|l| normalize_email(&l.email) == needle)
            .unwrap_or(false)
            || self
                .google
                .as_ref()
                .map(|g| normalize_email(&g.email) == needle)
                .unwrap_or(false)
    }

    /// Marks the account as verified
    ///
    /// The attempt record is intentionally left in place; it stops being
    /// consulted once `is_verified` is set.
    pub fn verify(&mut self) {
        self.is_verified = true;
        self.updated_at = Utc::now();
    }

    /// Derives the attempt state at the given instant
    pub fn attempt_state(&self, now: DateTime<Utc>) -> AttemptState {
        match &self.verification_attempts {
            None => AttemptState::Fresh,
            Some(attempts) => match attempts.blocked_until {
                Some(blocked_until) if blocked_until > now => {
                    AttemptState::Blocked { blocked_until }
                }
                _ => AttemptState::Counting {
                    count: attempts.count,
                    last_attempt: attempts.last_attempt,
                },
            },
        }
    }

    /// Creates the attempt record for the first attempt
    pub fn begin_attempts(&mut self, now: DateTime<Utc>) {
        self.verification_attempts = Some(VerificationAttempts::first(now));
        self.updated_at = now;
    }

    /// Overwrites the counter and attempt timestamp on an existing record
    ///
    /// Must only be called while a record exists; the gate creates one via
    /// `begin_attempts` first.
    pub fn record_attempt(&mut self, count: u32, now: DateTime<Utc>) {
        if let Some(attempts) = &mut self.verification_attempts {
            attempts.count = count;
            attempts.last_attempt = now;
            self.updated_at = now;
        }
    }

    /// Blocks verification attempts until the given instant
    pub fn block_attempts_until(&mut self, blocked_until: DateTime<Utc>, now: DateTime<Utc>) {
        if let Some(attempts) = &mut self.verification_attempts {
            attempts.blocked_until = Some(blocked_until);
            self.updated_at = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_local_account() {
        let account = Account::new_local("Jane@Example.com", Some("hash".to_string()));

        assert!(account.local.is_some());
        assert_eq!(account.local.as_ref().unwrap().email, "jane@example.com");
        assert!(account.google.is_none());
        assert!(!account.is_verified);
        assert!(account.verification_attempts.is_none());
    }

    #[test]
    fn test_matches_email_across_identities() {
        let mut account = Account::new_local("jane@example.com", None);
        account.google = Some(GoogleIdentity {
            email: "jane.work@gmail.com".to_string(),
            provider_id: "g-123".to_string(),
        });

        assert!(account.matches_email("JANE@example.com"));
        assert!(account.matches_email("jane.work@gmail.com"));
        assert!(!account.matches_email("other@example.com"));
    }

    #[test]
    fn test_verify_keeps_attempt_record() {
        let now = Utc::now();
        let mut account = Account::new_local("jane@example.com", None);
        account.begin_attempts(now);

        account.verify();

        assert!(account.is_verified);
        assert!(account.verification_attempts.is_some());
    }

    #[test]
    fn test_attempt_state_fresh() {
        let account = Account::new_google("jane@gmail.com", "g-123");
        assert_eq!(account.attempt_state(Utc::now()), AttemptState::Fresh);
    }

    #[test]
    fn test_attempt_state_counting() {
        let now = Utc::now();
        let mut account = Account::new_local("jane@example.com", None);
        account.begin_attempts(now);

        match account.attempt_state(now) {
            AttemptState::Counting { count, last_attempt } => {
                assert_eq!(count, 1);
                assert_eq!(last_attempt, now);
            }
            other => panic!("expected Counting, got {:?}", other),
        }
    }

    #[test]
    fn test_attempt_state_blocked_only_while_in_future() {
        let now = Utc::now();
        let mut account = Account::new_local("jane@example.com", None);
        account.begin_attempts(now);
        account.block_attempts_until(now + Duration::minutes(30), now);

        assert!(matches!(
            account.attempt_state(now),
            AttemptState::Blocked { .. }
        ));

        // After the block expires the state falls back to Counting
        let later = now + Duration::minutes(31);
        assert!(matches!(
            account.attempt_state(later),
            AttemptState::Counting { .. }
        ));
    }
}
