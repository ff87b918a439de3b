//! Progressive lockout state transitions.
//!
//! Pure calculations over a student's `failed_login_attempts` and
//! `lockout_until` columns. The login flow persists whatever these functions
//! decide; no background job is involved, lockout expiry is evaluated lazily
//! at the next attempt.

use chrono::{Duration, NaiveDateTime};

/// Lockout tunables, sourced from [`crate::config::Config`].
#[derive(Clone, Copy, Debug)]
pub struct LockoutPolicy {
    /// Failed attempts at which the account locks.
    pub threshold: u32,
    /// How long a lockout lasts.
    pub duration_minutes: i64,
}

/// Result of registering one failed login attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureOutcome {
    /// Still below the threshold; the caller should report how many attempts
    /// remain.
    Warned {
        failed_attempts: i32,
        attempts_remaining: u32,
    },
    /// The post-increment count reached the threshold; the account locks
    /// until the given timestamp.
    Locked {
        failed_attempts: i32,
        until: NaiveDateTime,
        minutes_remaining: i64,
    },
}

/// Minutes left on a lockout, or `None` once it has expired.
///
/// The remaining time is reported as a ceiling so "locked, retry in N
/// minutes" never understates the wait.
pub fn remaining_lockout(lockout_until: Option<NaiveDateTime>, now: NaiveDateTime) -> Option<i64> {
    let until = lockout_until?;

    if now >= until {
        return None;
    }

    let millis = (until - now).num_milliseconds();
    Some(((millis + 59_999) / 60_000).max(1))
}

/// Registers a failed attempt on top of `failed_attempts` prior failures.
pub fn register_failure(
    failed_attempts: i32,
    policy: &LockoutPolicy,
    now: NaiveDateTime,
) -> FailureOutcome {
    let attempts = failed_attempts + 1;

    if attempts >= policy.threshold as i32 {
        FailureOutcome::Locked {
            failed_attempts: attempts,
            until: now + Duration::minutes(policy.duration_minutes),
            minutes_remaining: policy.duration_minutes,
        }
    } else {
        FailureOutcome::Warned {
            failed_attempts: attempts,
            attempts_remaining: policy.threshold - attempts as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    const POLICY: LockoutPolicy = LockoutPolicy {
        threshold: 3,
        duration_minutes: 2,
    };

    #[test]
    fn no_lockout_without_timestamp() {
        let now = Utc::now().naive_utc();

        assert_eq!(remaining_lockout(None, now), None);
    }

    #[test]
    fn expired_lockout_unlocks_lazily() {
        let now = Utc::now().naive_utc();

        assert_eq!(remaining_lockout(Some(now - Duration::seconds(1)), now), None);
        assert_eq!(remaining_lockout(Some(now), now), None);
    }

    #[test]
    fn remaining_minutes_are_a_ceiling() {
        let now = Utc::now().naive_utc();

        assert_eq!(
            remaining_lockout(Some(now + Duration::seconds(61)), now),
            Some(2)
        );
        assert_eq!(
            remaining_lockout(Some(now + Duration::seconds(60)), now),
            Some(1)
        );
        assert_eq!(
            remaining_lockout(Some(now + Duration::milliseconds(500)), now),
            Some(1)
        );
    }

    #[test]
    fn warns_below_the_threshold() {
        let now = Utc::now().naive_utc();

        assert_eq!(
            register_failure(0, &POLICY, now),
            FailureOutcome::Warned {
                failed_attempts: 1,
                attempts_remaining: 2
            }
        );
        assert_eq!(
            register_failure(1, &POLICY, now),
            FailureOutcome::Warned {
                failed_attempts: 2,
                attempts_remaining: 1
            }
        );
    }

    #[test]
    fn locks_when_the_threshold_is_reached() {
        let now = Utc::now().naive_utc();

        let outcome = register_failure(2, &POLICY, now);

        assert_eq!(
            outcome,
            FailureOutcome::Locked {
                failed_attempts: 3,
                until: now + Duration::minutes(2),
                minutes_remaining: 2,
            }
        );
    }

    #[test]
    /// Failures past the threshold (e.g. after an expired lockout) re-lock
    fn relocks_past_the_threshold() {
        let now = Utc::now().naive_utc();

        let outcome = register_failure(3, &POLICY, now);

        assert!(matches!(outcome, FailureOutcome::Locked { failed_attempts: 4, .. }));
    }
}
