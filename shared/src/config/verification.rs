//! Verification attempt limit configuration

use serde::{Deserialize, Serialize};

/// Limits applied to email verification attempts
///
/// These values drive the verification gate: how many attempts an account
/// gets inside the counting window, how long a block lasts once the limit
/// is exceeded, and how long the counter survives without activity.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationLimits {
    /// Max verification attempts before the account is blocked
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Block duration in seconds after exceeding the limit
    #[serde(default = "default_block_duration")]
    pub block_duration_seconds: u64,

    /// Seconds of inactivity after which the attempt counter resets
    #[serde(default = "default_attempt_reset")]
    pub attempt_reset_seconds: u64,
}

impl Default for VerificationLimits {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            block_duration_seconds: default_block_duration(),
            attempt_reset_seconds: default_attempt_reset(),
        }
    }
}

impl VerificationLimits {
    /// Create a development configuration (more lenient limits)
    pub fn development() -> Self {
        Self {
            max_attempts: 50,
            block_duration_seconds: 60,
            attempt_reset_seconds: 60,
        }
    }

    /// Create a production configuration (default limits)
    pub fn production() -> Self {
        Self::default()
    }
}

fn default_max_attempts() -> u32 {
    5
}

fn default_block_duration() -> u64 {
    1800 // 30 minutes
}

fn default_attempt_reset() -> u64 {
    900 // 15 minutes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = VerificationLimits::default();
        assert_eq!(limits.max_attempts, 5);
        assert_eq!(limits.block_duration_seconds, 1800);
        assert_eq!(limits.attempt_reset_seconds, 900);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let limits: VerificationLimits = serde_json::from_str("{}").unwrap();
        assert_eq!(limits.max_attempts, 5);
        assert_eq!(limits.block_duration_seconds, 1800);
    }

    #[test]
    fn test_deserialize_partial_override() {
        let limits: VerificationLimits =
            serde_json::from_str(r#"{"max_attempts": 3}"#).unwrap();
        assert_eq!(limits.max_attempts, 3);
        assert_eq!(limits.attempt_reset_seconds, 900);
    }

    #[test]
    fn test_development_is_more_lenient() {
        let dev = VerificationLimits::development();
        let prod = VerificationLimits::production();
        assert!(dev.max_attempts > prod.max_attempts);
        assert!(dev.block_duration_seconds < prod.block_duration_seconds);
    }
}
