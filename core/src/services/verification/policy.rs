//! Policy values for the verification gate

use chrono::Duration;

use jp_shared::config::VerificationLimits;

/// Immutable policy passed to the gate at construction
///
/// Carried as a value rather than module constants so tests and alternate
/// deployments can exercise different thresholds without global state.
#[derive(Debug, Clone)]
pub struct GatePolicy {
    /// Attempts allowed inside the counting window before blocking
    pub max_attempts: u32,

    /// How long an account stays blocked once the limit is exceeded
    pub block_duration: Duration,

    /// Inactivity after which the counter resets on the next attempt
    pub reset_window: Duration,
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            block_duration: Duration::minutes(30),
            reset_window: Duration::minutes(15),
        }
    }
}

impl GatePolicy {
    /// Block duration in whole minutes, as quoted in the threshold-crossing
    /// rejection message
    pub fn block_minutes(&self) -> u32 {
        self.block_duration.num_minutes().max(0) as u32
    }
}

impl From<&VerificationLimits> for GatePolicy {
    fn from(limits: &VerificationLimits) -> Self {
        Self {
            max_attempts: limits.max_attempts,
            block_duration: Duration::seconds(limits.block_duration_seconds as i64),
            reset_window: Duration::seconds(limits.attempt_reset_seconds as i64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = GatePolicy::default();
        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.block_duration, Duration::minutes(30));
        assert_eq!(policy.reset_window, Duration::minutes(15));
        assert_eq!(policy.block_minutes(), 30);
    }

    #[test]
    fn test_from_limits() {
        let limits = VerificationLimits {
            max_attempts: 3,
            block_duration_seconds: 600,
            attempt_reset_seconds: 120,
        };
        let policy = GatePolicy::from(&limits);
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.block_duration, Duration::minutes(10));
        assert_eq!(policy.reset_window, Duration::minutes(2));
    }
}
